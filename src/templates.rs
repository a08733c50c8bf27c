use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, tmdb::SearchMovie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Ranked list, best movie first. Rankings must already be assigned.
pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your ratings." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add a movie to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies.iter().rev() {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title." }

                        @if let Some(message) = error {
                            p class="mt-4 text-sm text-red-600" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title";
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

/// Candidate matches from a title search; each links to the ingest route.
pub fn select_page(results: &[SearchMovie]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                    p class="mt-2 text-gray-600" { "Pick the title you meant." }

                    div class="mt-8 space-y-3" {
                        @for movie in results {
                            a class="block bg-white shadow rounded-lg p-5 hover:bg-blue-50" href=(format!("/find?id={}", movie.id)) {
                                h2 class="text-lg font-semibold text-gray-900" {
                                    (movie.title)
                                    @if let Some(date) = &movie.release_date {
                                        @if !date.is_empty() {
                                            span class="ml-2 font-normal text-gray-500" { "(" (date) ")" }
                                        }
                                    }
                                }
                                @if let Some(overview) = &movie.overview {
                                    p class="mt-1 text-sm text-gray-600 line-clamp-2" { (overview) }
                                }
                            }
                        }
                    }

                    a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, error: Option<&str>) -> String {
    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) " (" (movie.year) ")" }
                        p class="mt-2 text-gray-600" { "Rate and review." }

                        @if let Some(message) = error {
                            p class="mt-4 text-sm text-red-600" { (message) }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?movie_id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10, e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating";
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review";
                            }
                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="h-36 w-24 flex-none rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);
            div class="min-w-0 flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="text-gray-400 mr-2" { "#" (movie.ranking) }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="flex-none text-lg font-semibold text-amber-500" { (movie.rating) " / 10" }
                }
                p class="mt-2 text-sm text-gray-600 line-clamp-3" { (movie.description) }
                p class="mt-3 text-sm italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?movie_id={}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?movie_id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

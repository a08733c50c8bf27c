use serde::Deserialize;

use crate::error::AppResult;

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self { client, api_key, base_url }
    }

    pub async fn search_movies(&self, title: &str) -> AppResult<SearchResponse> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(query = title, total = resp.total_results, "tmdb search");
        Ok(resp)
    }

    pub async fn movie_details(&self, tmdb_id: i64) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let resp: MovieDetails = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_results: i64,
    pub results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// TMDB release dates are `YYYY-MM-DD`; only the year prefix matters here.
pub fn parse_year(release_date: &str) -> Option<i32> {
    release_date.split('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_year;

    #[test]
    fn year_is_prefix_before_first_dash() {
        assert_eq!(parse_year("2010-07-15"), Some(2010));
        assert_eq!(parse_year("1999-12-31"), Some(1999));
    }

    #[test]
    fn bare_year_parses() {
        assert_eq!(parse_year("2010"), Some(2010));
    }

    #[test]
    fn empty_or_garbage_is_none() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("soon"), None);
    }
}

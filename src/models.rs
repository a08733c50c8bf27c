use serde::Deserialize;

/// Add form: a single movie title to search for.
#[derive(Debug, Deserialize)]
pub struct AddMovieForm {
    pub title: String,
}

/// Rate/review form posted from the edit page.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: String,
    pub review: String,
}

impl ReviewForm {
    /// The edit page advertises "out of 10", so hold submissions to that.
    pub fn validate(&self) -> Result<(f64, &str), &'static str> {
        let review = self.review.trim();
        if review.is_empty() {
            return Err("review is required");
        }
        let rating = self.rating.trim();
        if rating.is_empty() {
            return Err("rating is required");
        }
        let rating: f64 = rating.parse().map_err(|_| "rating must be a number")?;
        if !(0.0..=10.0).contains(&rating) {
            return Err("rating must be between 0 and 10");
        }
        Ok((rating, review))
    }
}

/// A movie as ingested from TMDB, before it has a local id.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
    pub rating: f64,
    pub ranking: i32,
    pub review: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rating: &str, review: &str) -> ReviewForm {
        ReviewForm { rating: rating.to_string(), review: review.to_string() }
    }

    #[test]
    fn accepts_decimal_rating() {
        let form = form("7.5", "Great watch");
        let (rating, review) = form.validate().unwrap();
        assert_eq!(rating, 7.5);
        assert_eq!(review, "Great watch");
    }

    #[test]
    fn trims_whitespace() {
        let form = form(" 8 ", "  solid  ");
        let (rating, review) = form.validate().unwrap();
        assert_eq!(rating, 8.0);
        assert_eq!(review, "solid");
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(form("", "fine").validate(), Err("rating is required"));
        assert_eq!(form("7", "   ").validate(), Err("review is required"));
    }

    #[test]
    fn rejects_non_numeric_rating() {
        assert_eq!(form("ten", "fine").validate(), Err("rating must be a number"));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert_eq!(form("10.5", "fine").validate(), Err("rating must be between 0 and 10"));
        assert_eq!(form("-1", "fine").validate(), Err("rating must be between 0 and 10"));
    }
}

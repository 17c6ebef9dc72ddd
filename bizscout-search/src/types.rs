//! Wire model for one search exchange.
//!
//! Everything here lives for a single invocation: a query is built fresh from
//! the form inputs, the response is handed to the renderer, and nothing is
//! kept afterwards.

use serde::{Deserialize, Serialize};

/// JSON body for one `/search` request.
///
/// The backend expects `searchTerm` camel-cased on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub location: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

impl SearchQuery {
    pub fn new(location: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            search_term: search_term.into(),
        }
    }
}

/// One business record returned by the search backend.
///
/// `rating` is a textual numeral and may be absent or malformed; `snippet`
/// and `reviews` may be absent. Presence is the only thing validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub reviews: Option<String>,
}

impl Listing {
    /// Numeric view of `rating` for ordering.
    ///
    /// Absent, unparsable, and non-finite values all collapse to `0.0`, the
    /// lowest priority. The upstream feed omits the field instead of sending
    /// a literal zero, so the collapse does not shadow a real rating.
    pub fn rating_value(&self) -> f64 {
        self.rating
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Body of a `/search` response.
///
/// Exactly one of the two fields is meaningful; an explicit `error` takes
/// precedence over any listings. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub organic_results: Option<Vec<Listing>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(rating: Option<&str>) -> Listing {
        Listing {
            title: "x".into(),
            rating: rating.map(Into::into),
            snippet: None,
            reviews: None,
        }
    }

    #[test]
    fn rating_value_parses_textual_numerals() {
        assert_eq!(listing(Some("4.5")).rating_value(), 4.5);
        assert_eq!(listing(Some(" 3 ")).rating_value(), 3.0);
    }

    #[test]
    fn rating_value_falls_back_to_zero() {
        assert_eq!(listing(None).rating_value(), 0.0);
        assert_eq!(listing(Some("bad")).rating_value(), 0.0);
        assert_eq!(listing(Some("")).rating_value(), 0.0);
        assert_eq!(listing(Some("NaN")).rating_value(), 0.0);
    }

    #[test]
    fn query_serializes_camel_case_term() {
        let q = SearchQuery::new("San Francisco, California", "tacos");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": "San Francisco, California",
                "searchTerm": "tacos"
            })
        );
    }

    #[test]
    fn response_decodes_both_shapes() {
        let ok: SearchResponse =
            serde_json::from_str(r#"{"organic_results": [{"title": "Cafe"}]}"#).unwrap();
        assert!(ok.error.is_none());
        assert_eq!(ok.organic_results.unwrap()[0].title, "Cafe");

        let err: SearchResponse = serde_json::from_str(r#"{"error": "quota exceeded"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("quota exceeded"));
        assert!(err.organic_results.is_none());
    }
}

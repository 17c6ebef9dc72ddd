use crate::state::{ListingCard, ViewState};
use bizscout_search::{Listing, SearchError, SearchResponse};

pub const LOADING_MESSAGE: &str = "Searching...";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while searching";
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Map one search outcome to its terminal view state.
///
/// Transport failures become the generic message — the caller has already
/// logged the detail, which is never shown to the user. A backend `error`
/// string is shown verbatim and wins over any listings in the same body.
pub fn render(outcome: Result<SearchResponse, SearchError>) -> ViewState {
    let resp = match outcome {
        Ok(resp) => resp,
        Err(_) => return ViewState::Error(GENERIC_ERROR_MESSAGE.into()),
    };

    if let Some(message) = resp.error {
        return ViewState::Error(message);
    }

    match resp.organic_results {
        Some(mut listings) if !listings.is_empty() => {
            sort_listings(&mut listings);
            ViewState::Results(listings.into_iter().map(card_from).collect())
        }
        _ => ViewState::NoResults,
    }
}

/// Order listings by descending rating.
///
/// The sort is stable, so ties — including every entry that fell back to
/// rating 0 — keep their original response order.
pub fn sort_listings(listings: &mut [Listing]) {
    listings.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
}

fn card_from(listing: Listing) -> ListingCard {
    ListingCard {
        title: listing.title,
        rating: listing.rating.filter(|r| !r.trim().is_empty()),
        snippet: listing.snippet,
        reviews: listing.reviews.filter(|r| !r.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, rating: Option<&str>) -> Listing {
        Listing {
            title: title.into(),
            rating: rating.map(Into::into),
            snippet: Some(format!("{title} snippet")),
            reviews: None,
        }
    }

    fn response(listings: Vec<Listing>) -> SearchResponse {
        SearchResponse {
            error: None,
            organic_results: Some(listings),
        }
    }

    #[test]
    fn sorts_descending_with_zero_fallback_stable() {
        let state = render(Ok(response(vec![
            listing("three", Some("3")),
            listing("unrated", None),
            listing("four-five", Some("4.5")),
            listing("bad", Some("bad")),
            listing("five", Some("5")),
        ])));

        let ViewState::Results(cards) = state else {
            panic!("expected results");
        };
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        // The two fallback-zero entries keep their original relative order.
        assert_eq!(titles, ["five", "four-five", "three", "unrated", "bad"]);
    }

    #[test]
    fn backend_error_is_shown_verbatim() {
        let resp = SearchResponse {
            error: Some("quota exceeded".into()),
            organic_results: None,
        };
        assert_eq!(render(Ok(resp)), ViewState::Error("quota exceeded".into()));
    }

    #[test]
    fn error_wins_over_listings_in_the_same_body() {
        let resp = SearchResponse {
            error: Some("degraded".into()),
            organic_results: Some(vec![listing("ghost", Some("5"))]),
        };
        assert_eq!(render(Ok(resp)), ViewState::Error("degraded".into()));
    }

    #[test]
    fn empty_or_missing_listings_are_no_results() {
        assert_eq!(render(Ok(response(vec![]))), ViewState::NoResults);
        assert_eq!(render(Ok(SearchResponse::default())), ViewState::NoResults);
    }

    #[test]
    fn transport_failure_renders_the_generic_message() {
        let state = render(Err(SearchError::Network("connection refused".into())));
        assert_eq!(state, ViewState::Error(GENERIC_ERROR_MESSAGE.into()));
    }

    #[test]
    fn empty_rating_and_reviews_are_dropped_from_cards() {
        let state = render(Ok(response(vec![Listing {
            title: "Cafe".into(),
            rating: Some("".into()),
            snippet: Some("Quiet corner spot.".into()),
            reviews: Some(" ".into()),
        }])));

        let ViewState::Results(cards) = state else {
            panic!("expected results");
        };
        assert_eq!(cards[0].rating, None);
        assert_eq!(cards[0].reviews, None);
        assert_eq!(cards[0].snippet.as_deref(), Some("Quiet corner spot."));
    }
}

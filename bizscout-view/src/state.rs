/// One display-ready business card, already sorted into place.
///
/// Optional fields are genuinely absent, not empty strings; adapters render
/// a field if and only if it is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub title: String,
    pub rating: Option<String>,
    pub snippet: Option<String>,
    pub reviews: Option<String>,
}

/// What the display surface should show for one invocation.
///
/// The flow is linear: `Loading` goes up the moment a search is triggered,
/// then exactly one of the terminal states replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    NoResults,
    Results(Vec<ListingCard>),
}

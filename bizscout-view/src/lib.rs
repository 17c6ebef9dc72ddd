//! Pure rendering for search outcomes.
//!
//! [`render`] maps the result of one search invocation to a [`ViewState`];
//! thin adapters write that state to an actual display surface — the TUI
//! results pane, a plain-text page, or an escaped HTML fragment. Keeping the
//! sort and formatting here, away from any I/O, is what makes the contract
//! testable.

pub mod html;
mod render;
mod state;
pub mod text;

pub use render::{
    GENERIC_ERROR_MESSAGE, LOADING_MESSAGE, NO_RESULTS_MESSAGE, render, sort_listings,
};
pub use state::{ListingCard, ViewState};

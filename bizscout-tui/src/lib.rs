//! Interactive terminal front end.
//!
//! A two-field form (location, search term) over a results pane. Submitting
//! shows the loading marker immediately, runs the search on a spawned task,
//! and replaces the pane with whatever terminal state the renderer produces.
//! Completions are applied in arrival order; racing submissions simply
//! overwrite each other.

mod feeders;
mod field;
mod pane;
mod styles;
mod tui;
mod view;

pub use tui::run;

//! Plain-text encoding of a [`ViewState`] for one-shot command-line output.

use crate::render::{LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::state::ViewState;

/// Render a view state as a text page, one card per stanza.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => LOADING_MESSAGE.to_string(),
        ViewState::Error(message) => message.clone(),
        ViewState::NoResults => NO_RESULTS_MESSAGE.to_string(),
        ViewState::Results(cards) => {
            let mut stanzas = Vec::with_capacity(cards.len());
            for card in cards {
                let mut lines = Vec::new();
                match &card.rating {
                    Some(rating) => lines.push(format!("{} ★ {}", card.title, rating)),
                    None => lines.push(card.title.clone()),
                }
                if let Some(snippet) = &card.snippet {
                    lines.push(format!("  {snippet}"));
                }
                if let Some(reviews) = &card.reviews {
                    lines.push(format!("  Reviews: {reviews}"));
                }
                stanzas.push(lines.join("\n"));
            }
            stanzas.join("\n\n")
        }
    }
}

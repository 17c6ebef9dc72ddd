//! Escaped HTML encoding of a [`ViewState`].
//!
//! Every interpolated field goes through [`escape`]; all API-supplied text is
//! untrusted. The card markup carries stable class hooks (`business-card`,
//! `business-name`, `rating`, `business-info`) for whatever stylesheet hosts
//! the fragment.

use crate::render::{LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::state::{ListingCard, ViewState};

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a view state as an HTML fragment for the results region.
pub fn fragment(state: &ViewState) -> String {
    match state {
        ViewState::Loading => format!(r#"<div class="loading">{LOADING_MESSAGE}</div>"#),
        ViewState::Error(message) => format!(r#"<div class="error">{}</div>"#, escape(message)),
        ViewState::NoResults => format!(r#"<div class="error">{NO_RESULTS_MESSAGE}</div>"#),
        ViewState::Results(cards) => cards.iter().map(card).collect::<Vec<_>>().join("\n"),
    }
}

fn card(card: &ListingCard) -> String {
    let mut name = escape(&card.title);
    if let Some(rating) = &card.rating {
        name.push_str(&format!(
            r#" <span class="rating">★ {}</span>"#,
            escape(rating)
        ));
    }

    let mut info = String::new();
    if let Some(snippet) = &card.snippet {
        info.push_str(&escape(snippet));
    }
    if let Some(reviews) = &card.reviews {
        if !info.is_empty() {
            info.push_str("<br>");
        }
        info.push_str(&format!("Reviews: {}", escape(reviews)));
    }

    format!(
        r#"<div class="business-card"><div class="business-name">{name}</div><div class="business-info">{info}</div></div>"#
    )
}

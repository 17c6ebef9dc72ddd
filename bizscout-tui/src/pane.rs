use crate::styles;
use bizscout_view::{LOADING_MESSAGE, NO_RESULTS_MESSAGE, ViewState};
use ratatui::style::Style;

/// One styled line of the results pane.
#[derive(Clone)]
pub struct PaneLine {
    pub text: String,
    pub style: Style,
}

impl PaneLine {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Flatten a view state into styled pane lines.
pub fn lines(state: &ViewState) -> Vec<PaneLine> {
    match state {
        ViewState::Loading => vec![PaneLine::new(LOADING_MESSAGE, styles::loading())],
        ViewState::Error(message) => vec![PaneLine::new(message.clone(), styles::error())],
        ViewState::NoResults => vec![PaneLine::new(NO_RESULTS_MESSAGE, styles::dim())],
        ViewState::Results(cards) => {
            let mut out = Vec::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    out.push(PaneLine::new(String::new(), Style::default()));
                }
                let name = match &card.rating {
                    Some(rating) => format!("{} ★ {}", card.title, rating),
                    None => card.title.clone(),
                };
                out.push(PaneLine::new(name, styles::title()));
                if let Some(snippet) = &card.snippet {
                    out.push(PaneLine::new(format!("  {snippet}"), styles::info()));
                }
                if let Some(reviews) = &card.reviews {
                    out.push(PaneLine::new(format!("  Reviews: {reviews}"), styles::dim()));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizscout_view::ListingCard;

    #[test]
    fn loading_is_a_single_marker_line() {
        let out = lines(&ViewState::Loading);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Searching...");
    }

    #[test]
    fn cards_render_only_present_fields() {
        let out = lines(&ViewState::Results(vec![
            ListingCard {
                title: "La Taqueria".into(),
                rating: Some("4.5".into()),
                snippet: Some("Classic Mission burritos.".into()),
                reviews: Some("2710".into()),
            },
            ListingCard {
                title: "Unrated Cart".into(),
                rating: None,
                snippet: None,
                reviews: None,
            },
        ]));

        let texts: Vec<&str> = out.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "La Taqueria ★ 4.5",
                "  Classic Mission burritos.",
                "  Reviews: 2710",
                "",
                "Unrated Cart",
            ]
        );
    }

    #[test]
    fn backend_error_text_is_verbatim() {
        let out = lines(&ViewState::Error("quota exceeded".into()));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "quota exceeded");
    }
}

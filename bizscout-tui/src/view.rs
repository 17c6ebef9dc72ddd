use crate::field::Focus;
use crate::pane::PaneLine;
use crate::styles;
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use std::io::Stdout;
use textwrap::wrap;

/// Immutable snapshot of everything the frame needs.
pub struct ViewSnap {
    pub location: String,
    pub location_cursor: usize,
    pub term: String,
    pub term_cursor: usize,
    pub focus: Focus,
    pub lines: Vec<PaneLine>,
    pub scroll: usize,
    pub busy: u32,
    pub spinner: &'static str,
}

pub fn draw(term: &mut Terminal<CrosstermBackend<Stdout>>, snap: &ViewSnap) -> Result<()> {
    term.draw(|frame| {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(Line::from(Span::styled(" bizscout ", styles::header())));
        frame.render_widget(header, layout[0]);

        // Form row: location on the left, search term on the right
        let form = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        let border_for = |slot: Focus| {
            if snap.focus == slot {
                styles::focused_border()
            } else {
                Style::default()
            }
        };

        let location_box = Paragraph::new(snap.location.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_for(Focus::Location))
                .title(" Location "),
        );
        frame.render_widget(Clear, form[0]);
        frame.render_widget(location_box, form[0]);

        let term_box = Paragraph::new(snap.term.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_for(Focus::Term))
                .title(" Search term "),
        );
        frame.render_widget(Clear, form[1]);
        frame.render_widget(term_box, form[1]);

        // Caret in the focused input
        let (caret_area, text, cursor) = match snap.focus {
            Focus::Location => (form[0], &snap.location, snap.location_cursor),
            Focus::Term => (form[1], &snap.term, snap.term_cursor),
        };
        frame.set_cursor_position(Position {
            x: caret_area.x + 1 + visual_caret_col(text, cursor),
            y: caret_area.y + 1,
        });

        // Results pane
        let visible_h = layout[2].height.saturating_sub(2) as usize;
        let content_width = layout[2].width.saturating_sub(2) as usize;
        let wrapped = wrap_pane(&snap.lines, content_width);
        let total = wrapped.len();
        let start = snap.scroll.min(total.saturating_sub(visible_h));
        let end = (start + visible_h).min(total);

        let items: Vec<ListItem> = wrapped[start..end]
            .iter()
            .map(|(text, style)| ListItem::new(Line::from(Span::styled(text.clone(), *style))))
            .collect();

        let body =
            List::new(items).block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(body, layout[2]);

        // Status bar
        let status_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(snap.spinner, styles::loading()),
            Span::raw(" "),
            if snap.busy > 0 {
                Span::styled("Searching…", styles::loading())
            } else {
                Span::styled("Idle", Style::default())
            },
            Span::styled(
                "  Tab: switch · Enter: search · Ctrl+Q: quit",
                styles::dim(),
            ),
        ]);
        let status = Paragraph::new(status_line)
            .block(Block::default().borders(Borders::ALL).title(" Status "));
        frame.render_widget(status, layout[3]);
    })?;

    Ok(())
}

fn visual_caret_col(input: &str, cursor: usize) -> u16 {
    use unicode_width::UnicodeWidthStr;
    UnicodeWidthStr::width(&input[..cursor]) as u16
}

fn wrap_pane(lines: &[PaneLine], width: usize) -> Vec<(String, Style)> {
    let effective_width = width.max(1);
    let mut out = Vec::new();

    for entry in lines {
        if entry.text.is_empty() {
            out.push((String::new(), entry.style));
            continue;
        }
        let segments = wrap(&entry.text, effective_width);
        if segments.is_empty() {
            out.push((String::new(), entry.style));
        } else {
            out.extend(
                segments
                    .into_iter()
                    .map(|seg| (seg.into_owned(), entry.style)),
            );
        }
    }

    out
}

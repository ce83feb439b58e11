//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use ceka::context::Palette;

/// Render search input box above legend
///
/// # Arguments
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Rows surviving every filter
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    query: &str,
    active: bool,
    match_count: usize,
    palette: Palette,
) {
    let title = if active {
        format!(" {} ({} matches) - Esc to cancel ", label, match_count)
    } else {
        // Search accepted (Enter pressed)
        format!(" {} ({} matches) - Esc to clear ", label, match_count)
    };

    let border_color = if active { palette.focus } else { palette.border };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(palette.highlight)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(palette.muted),
        )])
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use ceka::context::{AppContext, Palette};
use ceka::logic::errors::error_label;
use ceka::model::types::ConnectionState;
use ceka::model::Model;

/// Render the bottom status bar
/// - Data source and connection state for the current page
/// - Sort and active facets on list pages
/// - Unread notification count
/// - The static support link once the donation widget has expired
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    model: &Model,
    ctx: &AppContext,
    support_url: &str,
    palette: Palette,
) {
    let status_bar = Paragraph::new(Line::from(build_status_spans(
        model,
        ctx,
        support_url,
        palette,
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status")
            .border_style(Style::default().fg(palette.border)),
    )
    .style(Style::default().fg(palette.muted));

    f.render_widget(status_bar, area);
}

fn build_status_spans(
    model: &Model,
    ctx: &AppContext,
    support_url: &str,
    palette: Palette,
) -> Vec<Span<'static>> {
    let label = |s: String| Span::styled(s, Style::default().fg(palette.highlight));
    let page = model.current_page();
    let mut parts: Vec<Vec<Span<'static>>> = Vec::new();

    match &model.data.connection_state {
        ConnectionState::Connected => {}
        ConnectionState::Disconnected { error_type, .. } => {
            parts.push(vec![Span::styled(
                format!("{} ({})", ctx.t("status.disconnected"), error_label(error_type)),
                Style::default().fg(palette.danger),
            )]);
        }
    }

    if let Some(source) = model.data.source(page) {
        parts.push(vec![Span::raw(ctx.t(source.label_key()).to_string())]);
    }

    if page.has_list() {
        let view = model.navigation.current_view();
        parts.push(vec![
            label(format!("{}:", ctx.t("list.sort"))),
            Span::raw(format!(" {}{}", view.sort_key.as_str(), view.direction.arrow())),
        ]);
        if !view.criteria.categories.is_empty() {
            let categories: Vec<&str> =
                view.criteria.categories.iter().map(String::as_str).collect();
            parts.push(vec![
                label(format!("{}:", ctx.t("list.category"))),
                Span::raw(format!(" {}", categories.join(","))),
            ]);
        }
        if !view.criteria.kinds.is_empty() {
            let kinds: Vec<&str> = view.criteria.kinds.iter().map(String::as_str).collect();
            parts.push(vec![
                label(format!("{}:", ctx.t("list.type"))),
                Span::raw(format!(" {}", kinds.join(","))),
            ]);
        }
    }

    let unread = model.data.unread_notifications();
    if unread > 0 {
        parts.push(vec![Span::raw(format!("{} {}", unread, ctx.t("status.unread")))]);
    }

    if model.ui.support_link_visible {
        parts.push(vec![Span::styled(
            format!("♥ {}: {}", ctx.t("widget.support_link"), support_url),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )]);
    }

    let mut spans = Vec::new();
    for (idx, part) in parts.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.extend(part);
    }
    spans
}

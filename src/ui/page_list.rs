use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use ceka::context::{AppContext, Palette};
use ceka::logic::formatting::{format_relative, truncate_to_width};
use ceka::logic::listing::Listing;
use ceka::logic::navigation::has_more;
use ceka::model::Model;
use ceka::Page;

/// One list row: title, badge and age
fn build_row<'a>(
    item: &dyn Listing,
    unread: bool,
    width: usize,
    now: DateTime<Utc>,
    palette: Palette,
) -> Line<'a> {
    let age = format_relative(item.created_at(), now);
    let badge = item.badge().map(|b| format!(" [{}]", b)).unwrap_or_default();
    let marker = if unread { "● " } else { "  " };

    // Reserve room for marker, badge and age
    let reserved = 2 + badge.chars().count() + age.chars().count() + 2;
    let title = truncate_to_width(item.title(), width.saturating_sub(reserved));

    let title_style = if unread {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::styled(title, title_style),
        Span::styled(badge, Style::default().fg(palette.highlight)),
        Span::raw("  "),
        Span::styled(age, Style::default().fg(palette.muted)),
    ])
}

pub fn render_page_list(
    f: &mut Frame,
    area: Rect,
    model: &Model,
    ctx: &AppContext,
    palette: Palette,
    now: DateTime<Utc>,
) {
    let page = model.current_page();
    let view = model.navigation.current_view();
    let shown = view.shown();
    let total = view.visible.len();

    let title = format!(" {} ({}/{}) ", ctx.t(page.label_key()), shown.len(), total);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(palette.focus));

    if shown.is_empty() {
        let key = if model.is_loading(page) {
            "list.loading"
        } else {
            "list.empty"
        };
        let empty = Paragraph::new(ctx.t(key))
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let mut items: Vec<ListItem> = shown
        .iter()
        .filter_map(|&idx| {
            let item = model.data.listing(page, idx)?;
            let unread = page == Page::Notifications
                && model
                    .data
                    .notifications
                    .get(idx)
                    .is_some_and(|n| !n.read);
            Some(ListItem::new(build_row(item, unread, inner_width, now, palette)))
        })
        .collect();

    if has_more(view.limit, total) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("  ↓ {} {} (m)", total - view.limit, ctx.t("list.load_more")),
            Style::default().fg(palette.muted),
        ))));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(palette.selection_bg)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(view.selected);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceka::api::Bill;
    use ceka::context::Theme;
    use chrono::TimeZone;

    fn spans_to_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_row_contains_title_badge_and_age() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let bill = Bill {
            id: "b1".to_string(),
            title: "Finance Bill 2024".to_string(),
            summary: String::new(),
            status: "Passed".to_string(),
            category: "finance".to_string(),
            sponsor: String::new(),
            tags: vec![],
            views: 0,
            created_at: Utc.with_ymd_and_hms(2024, 6, 7, 0, 0, 0).unwrap(),
        };
        let line = build_row(&bill, false, 80, now, Theme::Dark.palette());
        let text = spans_to_text(&line);
        assert!(text.contains("Finance Bill 2024"));
        assert!(text.contains("[Passed]"));
        assert!(text.contains(&format_relative(bill.created_at, now)));
    }
}

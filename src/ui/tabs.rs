use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use ceka::context::{AppContext, Palette};
use ceka::Page;

/// Tab titles, with the unread count on the notifications tab
fn tab_titles(ctx: &AppContext, unread: usize) -> Vec<String> {
    Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let label = ctx.t(page.label_key());
            if *page == Page::Notifications && unread > 0 {
                format!("{} {} ({})", i + 1, label, unread)
            } else {
                format!("{} {}", i + 1, label)
            }
        })
        .collect()
}

pub fn render_tabs(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    current: Page,
    unread: usize,
    palette: Palette,
) {
    let titles: Vec<Line> = tab_titles(ctx, unread).into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceka::context::{Language, Theme};

    #[test]
    fn test_unread_count_only_on_notifications() {
        let ctx = AppContext::new(None, Theme::Dark, Language::English);
        let titles = tab_titles(&ctx, 2);
        assert_eq!(titles[0], "1 Bills");
        assert_eq!(titles[5], "6 Notifications (2)");
    }

    #[test]
    fn test_titles_follow_language() {
        let ctx = AppContext::new(None, Theme::Dark, Language::Swahili);
        assert_eq!(tab_titles(&ctx, 0)[0], "1 Miswada");
    }
}

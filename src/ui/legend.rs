use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use ceka::context::Palette;
use ceka::Page;

/// Inputs that change which hotkeys are shown
#[derive(Debug, Clone, Copy)]
pub struct LegendState {
    pub vim_mode: bool,
    pub page: Page,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub widget_visible: bool,
    pub widget_expanded: bool,
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(state: LegendState, palette: Palette) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(palette.highlight));
    let mut hotkey_spans = vec![];

    // While expanded only the panel keys are listed
    if state.widget_expanded {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Close  "), key("q"), Span::raw(":Quit")]);
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if state.vim_mode {
        hotkey_spans.extend(vec![
            key("jk"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Home/End"),
            Span::raw(":First/Last  "),
        ]);
    }
    hotkey_spans.extend(vec![key("Tab/1-7"), Span::raw(":Page  ")]);

    if state.page.has_list() {
        // Search key - contextual based on search state
        if state.search_mode {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Exit Search  ")]);
        } else if state.has_search_query {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
        } else {
            let search_key = if state.vim_mode { "/" } else { "^F" };
            hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
        }

        hotkey_spans.extend(vec![
            key("s"),
            Span::raw(":Sort  "),
            key("S"),
            Span::raw(":Reverse  "),
            key("c"),
            Span::raw(":Category  "),
        ]);

        if state.page == Page::Resources {
            hotkey_spans.extend(vec![key("f"), Span::raw(":Type  ")]);
        }

        hotkey_spans.extend(vec![
            key("x"),
            Span::raw(":Clear Filters  "),
            key("m"),
            Span::raw(":More  "),
        ]);
    }

    if state.page == Page::Notifications {
        hotkey_spans.extend(vec![key("r"), Span::raw(":Mark Read  ")]);
    }

    hotkey_spans.extend(vec![
        key("R"),
        Span::raw(":Reload  "),
        key("F"),
        Span::raw(":Feedback  "),
        key("T"),
        Span::raw(":Theme  "),
        key("L"),
        Span::raw(":Language  "),
    ]);

    if state.widget_visible {
        hotkey_spans.extend(vec![key("d"), Span::raw(":Support  ")]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(state: LegendState, palette: Palette) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(state, palette));

    Paragraph::new(vec![hotkey_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hotkeys")
                .border_style(Style::default().fg(palette.border)),
        )
        .style(Style::default().fg(palette.muted))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, state: LegendState, palette: Palette) {
    f.render_widget(build_legend_paragraph(state, palette), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, state: LegendState, palette: Palette) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let hotkey_line = Line::from(build_hotkey_spans(state, palette));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceka::context::Theme;

    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    fn state(page: Page) -> LegendState {
        LegendState {
            vim_mode: false,
            page,
            search_mode: false,
            has_search_query: false,
            widget_visible: false,
            widget_expanded: false,
        }
    }

    fn text_for(state: LegendState) -> String {
        spans_to_text(&build_hotkey_spans(state, Theme::Dark.palette()))
    }

    #[test]
    fn test_type_filter_only_on_resources() {
        assert!(text_for(state(Page::Resources)).contains("f:Type"));
        assert!(!text_for(state(Page::Bills)).contains("f:Type"));
    }

    #[test]
    fn test_mark_read_only_on_notifications() {
        assert!(text_for(state(Page::Notifications)).contains("r:Mark Read"));
        assert!(!text_for(state(Page::Discussions)).contains("r:Mark Read"));
    }

    #[test]
    fn test_search_key_follows_search_state() {
        let mut s = state(Page::Bills);
        assert!(text_for(s).contains("^F:Search"));

        s.vim_mode = true;
        assert!(text_for(s).contains("/:Search"));

        s.has_search_query = true;
        assert!(text_for(s).contains("Esc:Clear Search"));

        s.search_mode = true;
        assert!(text_for(s).contains("Esc:Exit Search"));
    }

    #[test]
    fn test_profile_page_has_no_list_keys() {
        let text = text_for(state(Page::Profile));
        assert!(!text.contains(":Sort"));
        assert!(text.contains("F:Feedback"));
    }

    #[test]
    fn test_support_key_only_while_widget_visible() {
        let mut s = state(Page::Bills);
        assert!(!text_for(s).contains("d:Support"));
        s.widget_visible = true;
        assert!(text_for(s).contains("d:Support"));
    }

    #[test]
    fn test_expanded_widget_shows_close_only() {
        let mut s = state(Page::Bills);
        s.widget_visible = true;
        s.widget_expanded = true;
        let text = text_for(s);
        assert!(text.contains("Esc:Close"));
        assert!(!text.contains(":Sort"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let palette = Theme::Dark.palette();
        let wide = calculate_legend_height(400, state(Page::Resources), palette);
        let narrow = calculate_legend_height(40, state(Page::Resources), palette);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}

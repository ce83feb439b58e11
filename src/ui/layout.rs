use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub title_area: Rect,
    /// Page tabs
    pub tabs_area: Rect,
    /// Record list (or the whole content area on the profile page)
    pub list_area: Rect,
    /// Detail pane for the selected record (None when too narrow)
    pub detail_area: Option<Rect>,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Below this width the detail pane is dropped
const MIN_SPLIT_WIDTH: u16 = 80;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    search_visible: bool,
    legend_height: u16,
    split_detail: bool,
) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(3),             // Tabs
            Constraint::Min(3),                // Content
            Constraint::Length(search_height), // Search input (hidden = 0)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content = main_chunks[2];
    let (list_area, detail_area) = if split_detail && content.width >= MIN_SPLIT_WIDTH {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(content);
        (halves[0], Some(halves[1]))
    } else {
        (content, None)
    };

    LayoutInfo {
        title_area: main_chunks[0],
        tabs_area: main_chunks[1],
        list_area,
        detail_area,
        search_area: if search_visible {
            Some(main_chunks[3])
        } else {
            None
        },
        legend_area: main_chunks[4],
        status_area: main_chunks[5],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_splits_detail() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), false, 3, true);
        assert!(info.detail_area.is_some());
        assert!(info.search_area.is_none());
        assert_eq!(info.status_area.height, 3);
    }

    #[test]
    fn test_narrow_terminal_has_no_detail() {
        let info = calculate_layout(Rect::new(0, 0, 60, 40), true, 3, true);
        assert!(info.detail_area.is_none());
        assert_eq!(info.search_area.map(|a| a.height), Some(3));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(area, 40, 4);
        assert_eq!(r.width, 20);
        assert_eq!(r.y, 3);
    }
}

// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title, tabs, list/detail split, bars)
// - render: Main orchestration function that coordinates all rendering
// - tabs: Page tabs with unread badge
// - page_list: Filtered, sorted record list with "load more" footer
// - detail: Detail pane for the selected record, and the profile page
// - search: Renders search input box with query and match count
// - legend: Renders hotkey legend
// - status_bar: Data source, connection, sort/filter summary, support link
// - widget: Floating donation widget (collapsed button or expanded panel)
// - feedback: Feedback form dialog
// - toast: Renders toast notifications (brief pop-up messages)

pub mod detail;
pub mod feedback;
pub mod layout;
pub mod legend;
pub mod page_list;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod tabs;
pub mod toast;
pub mod widget;

// Re-export main render function for convenience
pub use render::render;

//! Donation widget wiring
//!
//! Translates terminal input into widget events. Every event is stamped with
//! the current instant; the controller itself never reads the clock.

use ratatui::layout::Position;
use std::time::Instant;
use tracing::debug;

use ceka::logic::ui::hover_event;
use ceka::widget::WidgetEvent;

use crate::App;

impl App {
    fn widget_event(&mut self, event: WidgetEvent) {
        self.widget.dispatch(event, Instant::now());
    }

    pub(crate) fn expand_widget(&mut self) {
        self.widget_event(WidgetEvent::ExpandRequest);
    }

    pub(crate) fn collapse_widget(&mut self) {
        self.widget_event(WidgetEvent::CollapseRequest);
    }

    /// Pointer moved to (column, row); emits enter/leave on crossings only
    pub(crate) fn pointer_moved(&mut self, column: u16, row: u16) {
        self.last_pointer = Some(Position::new(column, row));
        self.sync_hover();
    }

    /// Re-test the last pointer position against the widget area.
    ///
    /// Called after every draw: the area changes on show, expand and collapse
    /// while the pointer may stay put.
    pub(crate) fn sync_hover(&mut self) {
        let hovering = self.widget.state().hovering;
        if let Some(event) = hover_event(self.widget_area, self.last_pointer, hovering) {
            self.widget_event(event);
        }
    }

    pub(crate) fn pointer_clicked(&mut self, column: u16, row: u16) {
        let inside = self
            .widget_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        if inside && !self.widget.state().expanded {
            self.expand_widget();
        }
    }

    /// Expiry listener fired: swap the widget for the static support line
    pub(crate) fn on_widget_expired(&mut self) {
        debug!("widget expired, showing support link");
        self.model.ui.support_link_visible = true;
        self.widget_area = None;
    }
}

//! Donation Widget UI
//!
//! Draws whatever the controller's view snapshot says: nothing, the
//! collapsed button in the bottom-right corner of the content area, or the
//! expanded panel centered on screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use ceka::context::{AppContext, Palette};
use ceka::widget::WidgetView;

use super::layout::centered_rect;

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 11;

/// Style of the collapsed button for the current flags
fn button_style(view: WidgetView, palette: Palette) -> Style {
    let mut style = Style::default().fg(palette.accent);
    if view.pulsing {
        style = style.add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);
    }
    if view.idle {
        style = style.add_modifier(Modifier::DIM);
    }
    if view.hovering {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Button rectangle anchored to the bottom-right corner of `content`
fn button_rect(content: Rect, label: &str) -> Rect {
    let width = (label.width() as u16 + 4).min(content.width);
    let height = 3.min(content.height);
    Rect {
        x: content.x + content.width - width,
        y: content.y + content.height - height,
        width,
        height,
    }
}

/// Render the widget; returns the hit area for pointer events
pub fn render_widget(
    f: &mut Frame,
    content: Rect,
    screen: Rect,
    view: WidgetView,
    ctx: &AppContext,
    support_url: &str,
    palette: Palette,
) -> Option<Rect> {
    if !view.visible {
        return None;
    }

    if view.expanded {
        let area = centered_rect(screen, PANEL_WIDTH, PANEL_HEIGHT);
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(""),
            Line::from(ctx.t("widget.body")),
            Line::from(""),
            Line::from(Span::styled(
                support_url.to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                ctx.t("widget.close"),
                Style::default().fg(palette.muted),
            )),
        ];

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" ♥ {} ", ctx.t("widget.title")))
                    .border_style(
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(panel, area);
        return Some(area);
    }

    let label = ctx.t("widget.button");
    let area = button_rect(content, label);
    if area.width < 3 || area.height < 3 {
        return None;
    }
    f.render_widget(Clear, area);

    let style = button_style(view, palette);
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center);
    f.render_widget(button, area);
    Some(area)
}

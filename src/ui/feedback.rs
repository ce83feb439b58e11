use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use ceka::context::{AppContext, Palette};
use ceka::model::types::{FeedbackField, FeedbackForm};

use super::layout::centered_rect;

fn rating_stars(rating: Option<u8>) -> String {
    let filled = rating.unwrap_or(0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled.min(5)))
}

fn form_lines(form: &FeedbackForm, ctx: &AppContext, palette: Palette) -> Vec<Line<'static>> {
    let label_style = |field: FeedbackField| {
        if form.field == field {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        }
    };

    let mut message = vec![Span::raw(form.message.clone())];
    if form.field == FeedbackField::Message {
        message.push(Span::styled(
            "█",
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", ctx.t("feedback.category")),
                label_style(FeedbackField::Category),
            ),
            Span::raw(format!("< {} >", form.category_name())),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: ", ctx.t("feedback.rating")),
                label_style(FeedbackField::Rating),
            ),
            Span::styled(
                rating_stars(form.rating),
                Style::default().fg(palette.highlight),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}:", ctx.t("feedback.message")),
            label_style(FeedbackField::Message),
        )),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            ctx.t("feedback.hint").to_string(),
            Style::default().fg(palette.muted),
        )),
    ]
}

/// Render the feedback dialog over the current screen
pub fn render_feedback(
    f: &mut Frame,
    screen: Rect,
    form: &FeedbackForm,
    ctx: &AppContext,
    palette: Palette,
) {
    let area = centered_rect(screen, 70, 12);
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(form_lines(form, ctx, palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ctx.t("feedback.title")))
                .border_style(Style::default().fg(palette.focus)),
        )
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: false });

    f.render_widget(dialog, area);
}

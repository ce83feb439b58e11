use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use ceka::api::Profile;
use ceka::context::{AppContext, Palette};
use ceka::logic::formatting::format_relative;
use ceka::logic::listing::Listing;

fn field_line(label: &str, value: String, palette: Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(palette.muted)),
        Span::styled(value, Style::default().fg(palette.text)),
    ])
}

/// Lines for the selected record's detail pane
fn detail_lines(item: &dyn Listing, now: DateTime<Utc>, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            item.title().to_string(),
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (label, value) in item.details() {
        if !value.is_empty() {
            lines.push(field_line(label, value, palette));
        }
    }
    lines.push(field_line(
        "Added",
        format_relative(item.created_at(), now),
        palette,
    ));

    if !item.tags().is_empty() {
        let tags = item
            .tags()
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            tags,
            Style::default().fg(palette.accent),
        )));
    }

    if !item.description().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(item.description().to_string()));
    }

    lines
}

pub fn render_detail(
    f: &mut Frame,
    area: Rect,
    item: Option<&dyn Listing>,
    now: DateTime<Utc>,
    palette: Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let lines = match item {
        Some(item) => detail_lines(item, now, palette),
        None => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Profile page: the signed-in user's profile, or a sign-in hint
pub fn render_profile(
    f: &mut Frame,
    area: Rect,
    profile: Option<&Profile>,
    signed_in: bool,
    ctx: &AppContext,
    palette: Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", ctx.t("nav.profile")))
        .border_style(Style::default().fg(palette.focus));

    let lines = match (profile, signed_in) {
        (Some(p), true) => {
            let value = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
            vec![
                field_line(ctx.t("profile.name"), value(&p.full_name), palette),
                field_line(ctx.t("profile.email"), value(&p.email), palette),
                field_line(ctx.t("profile.county"), value(&p.county), palette),
                field_line(ctx.t("profile.bio"), value(&p.bio), palette),
            ]
        }
        (None, true) => vec![Line::from(Span::styled(
            ctx.t("list.loading").to_string(),
            Style::default().fg(palette.muted),
        ))],
        (_, false) => vec![Line::from(Span::styled(
            ctx.t("profile.signed_out").to_string(),
            Style::default().fg(palette.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceka::api::Resource;
    use ceka::context::Theme;
    use chrono::TimeZone;

    #[test]
    fn test_detail_lines_skip_empty_fields_and_show_tags() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let resource = Resource {
            id: "r1".to_string(),
            title: "Know Your Rights".to_string(),
            description: "Plain-language guide".to_string(),
            resource_type: "document".to_string(),
            category: String::new(),
            tags: vec!["rights".to_string()],
            url: None,
            views: 10,
            downloads: 2,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };
        let text: Vec<String> = detail_lines(&resource, now, Theme::Dark.palette())
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "Know Your Rights");
        assert!(!text.iter().any(|l| l.starts_with("Category:")));
        assert!(text.iter().any(|l| l == "#rights"));
        assert_eq!(text.last().map(String::as_str), Some("Plain-language guide"));
    }
}

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::App;

use super::{
    detail, feedback, layout, legend, legend::LegendState, page_list, search, status_bar, tabs,
    toast, widget,
};

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.ctx.theme.palette();
    let user = app
        .ctx
        .session
        .current()
        .map(|s| s.email)
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled(
            " CEKA ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{}: {}  {}: {}  {}",
                app.ctx.t("settings.theme"),
                app.ctx.theme.current().as_str(),
                app.ctx.t("settings.language"),
                app.ctx.language.current().code(),
                user
            ),
            Style::default().fg(palette.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let palette = app.ctx.theme.palette();
    let now = Utc::now();
    let page = app.model.current_page();
    let view = app.model.navigation.current_view();
    let widget_view = app.widget.view();

    let has_query = !view.criteria.query.is_empty();
    let search_visible = page.has_list() && (app.model.ui.search_mode || has_query);

    let legend_state = LegendState {
        vim_mode: app.model.ui.vim_mode,
        page,
        search_mode: app.model.ui.search_mode,
        has_search_query: has_query,
        widget_visible: widget_view.visible,
        widget_expanded: widget_view.expanded,
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_state, palette);
    let layout_info =
        layout::calculate_layout(size, search_visible, legend_height, page.has_list());

    render_title(f, layout_info.title_area, app);
    tabs::render_tabs(
        f,
        layout_info.tabs_area,
        &app.ctx,
        page,
        app.model.data.unread_notifications(),
        palette,
    );

    if page.has_list() {
        page_list::render_page_list(f, layout_info.list_area, &app.model, &app.ctx, palette, now);
        if let Some(detail_area) = layout_info.detail_area {
            detail::render_detail(f, detail_area, app.model.selected_listing(), now, palette);
        }
    } else {
        detail::render_profile(
            f,
            layout_info.list_area,
            app.model.data.profile.as_ref(),
            app.ctx.session.is_authenticated(),
            &app.ctx,
            palette,
        );
    }

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            app.ctx.t("search.title"),
            &app.model.navigation.current_view().criteria.query,
            app.model.ui.search_mode,
            app.model.navigation.current_view().visible.len(),
            palette,
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_state, palette);
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model,
        &app.ctx,
        &app.support_url,
        palette,
    );

    // Content area spans the list and the detail pane
    let content = match layout_info.detail_area {
        Some(detail_area) => layout_info.list_area.union(detail_area),
        None => layout_info.list_area,
    };
    app.widget_area = widget::render_widget(
        f,
        content,
        size,
        widget_view,
        &app.ctx,
        &app.support_url,
        palette,
    );

    if let Some(form) = &app.model.ui.feedback {
        feedback::render_feedback(f, size, form, &app.ctx, palette);
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message, palette);
    }
}

//! Keyboard Input Handler
//!
//! Handles all keyboard input. Modal inputs (feedback form, search prompt,
//! expanded widget) get first refusal; everything else is a global hotkey.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ceka::logic;
use ceka::model::{FeedbackField, VimCommandState};

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.model.ui.feedback.is_some() {
        handle_feedback_key(app, key);
        return Ok(());
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return Ok(());
    }

    // Esc collapses an expanded widget before it clears a search
    if app.widget.state().expanded && key.code == KeyCode::Esc {
        app.collapse_widget();
        return Ok(());
    }

    // Vim 'gg' double-key
    if app.model.ui.vim_mode {
        if key.code == KeyCode::Char('g') && key.modifiers.is_empty() {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                app.model.ui.vim_command_state = VimCommandState::None;
                app.select_first();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
            return Ok(());
        }
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Pages
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.prev_page(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(page) = logic::navigation::page_for_digit(c) {
                app.switch_page(page);
            }
        }

        // Selection
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char('j') if app.model.ui.vim_mode => app.select_next(),
        KeyCode::Char('k') if app.model.ui.vim_mode => app.select_prev(),
        KeyCode::Char('G') if app.model.ui.vim_mode => app.select_last(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Search
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => app.start_search(),
        KeyCode::Esc => {
            if !app.model.navigation.current_view().criteria.query.is_empty() {
                app.clear_search();
            }
        }

        // Sort and facets
        KeyCode::Char('s') => app.cycle_sort_key(),
        KeyCode::Char('S') => app.toggle_sort_direction(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('f') => app.cycle_kind(),
        KeyCode::Char('x') => app.clear_facets(),
        KeyCode::Char('m') => app.load_more(),

        // Actions
        KeyCode::Char('r') => app.mark_selected_notification_read(),
        KeyCode::Char('R') => app.reload_current_page(),
        KeyCode::Char('F') => app.open_feedback(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('L') => app.toggle_language(),
        KeyCode::Char('d') => app.expand_widget(),

        _ => {}
    }

    Ok(())
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
}

fn handle_feedback_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_feedback();
            return;
        }
        KeyCode::Enter => {
            app.submit_feedback();
            return;
        }
        _ => {}
    }

    let Some(form) = app.model.ui.feedback.as_mut() else {
        return;
    };

    match (form.field, key.code) {
        (_, KeyCode::Tab) => form.next_field(),
        (FeedbackField::Category, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
            form.cycle_category()
        }
        (FeedbackField::Rating, KeyCode::Char(c)) if c.is_ascii_digit() => {
            form.set_rating(c as u8 - b'0')
        }
        (FeedbackField::Rating, KeyCode::Left) => {
            let r = form.rating.unwrap_or(1).saturating_sub(1);
            form.set_rating(r)
        }
        (FeedbackField::Rating, KeyCode::Right) => {
            let r = form.rating.unwrap_or(0).saturating_add(1).min(5);
            form.set_rating(r)
        }
        (FeedbackField::Message, KeyCode::Backspace) => {
            form.message.pop();
        }
        (FeedbackField::Message, KeyCode::Char(c)) => form.message.push(c),
        _ => {}
    }
}

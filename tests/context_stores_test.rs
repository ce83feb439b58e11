//! Integration tests for the application context stores
//!
//! Subscribers observe session, theme and language changes made through the
//! bundled `AppContext`, and translation follows the language store.

use chrono::{Duration, Utc};

use ceka::context::{AppContext, Language, Session, Theme};

fn session() -> Session {
    Session {
        user_id: "u-42".to_string(),
        email: "achieng@example.test".to_string(),
        access_token: "token".to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

/// Test: A session subscriber sees sign-in and sign-out
#[tokio::test]
async fn test_session_subscribers_see_changes() {
    let ctx = AppContext::new(None, Theme::Dark, Language::English);
    let mut rx = ctx.session.subscribe();
    assert!(rx.borrow().is_none());

    ctx.session.set(session());
    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().as_ref().map(|s| s.user_id.clone()),
        Some("u-42".to_string())
    );

    ctx.session.clear();
    rx.changed().await.unwrap();
    assert!(rx.borrow().is_none());
    assert!(!ctx.session.is_authenticated());
}

/// Test: Theme toggles are broadcast and change the palette
#[tokio::test]
async fn test_theme_toggle_is_broadcast() {
    let ctx = AppContext::new(None, Theme::Dark, Language::English);
    let mut rx = ctx.theme.subscribe();
    let dark = ctx.theme.palette();

    assert_eq!(ctx.theme.toggle(), Theme::Light);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), Theme::Light);
    assert_ne!(ctx.theme.palette(), dark);
}

/// Test: Translation follows the language store
#[tokio::test]
async fn test_language_toggle_switches_translations() {
    let ctx = AppContext::new(Some(session()), Theme::Light, Language::English);
    let mut rx = ctx.language.subscribe();
    assert_eq!(ctx.t("nav.bills"), "Bills");

    ctx.language.toggle();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), Language::Swahili);
    assert_eq!(ctx.t("nav.bills"), "Miswada");

    // Unknown keys fall back to the key itself
    assert_eq!(ctx.t("missing.key"), "missing.key");
}

/// Test: Stores are independent of each other
#[test]
fn test_stores_are_independent() {
    let ctx = AppContext::new(Some(session()), Theme::Dark, Language::Swahili);
    ctx.theme.toggle();

    assert_eq!(ctx.language.current(), Language::Swahili);
    assert!(ctx.session.is_authenticated());
    assert_eq!(ctx.theme.current(), Theme::Light);
}

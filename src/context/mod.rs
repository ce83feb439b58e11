//! Application Context
//!
//! Explicit stores for state that every screen reads: the signed-in session,
//! the color theme and the UI language. Each store is created once at startup
//! and publishes changes over a `tokio::sync::watch` channel.

pub mod language;
pub mod session;
pub mod theme;

pub use language::{translate, Language, LanguageStore};
pub use session::{Session, SessionStore};
pub use theme::{Palette, Theme, ThemeStore};

/// The three stores bundled for injection into the app
#[derive(Debug)]
pub struct AppContext {
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub language: LanguageStore,
}

impl AppContext {
    pub fn new(session: Option<Session>, theme: Theme, language: Language) -> Self {
        Self {
            session: SessionStore::new(session),
            theme: ThemeStore::new(theme),
            language: LanguageStore::new(language),
        }
    }

    /// Shorthand for translating with the current language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }
}

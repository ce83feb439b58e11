use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Colors used by the terminal renderer
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Green,
                highlight: Color::Yellow,
                selection_bg: Color::DarkGray,
                border: Color::Gray,
                focus: Color::Cyan,
                danger: Color::Red,
            },
            Theme::Light => Palette {
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Green,
                highlight: Color::Blue,
                selection_bg: Color::Gray,
                border: Color::DarkGray,
                focus: Color::Blue,
                danger: Color::Red,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub focus: Color,
    pub danger: Color,
}

#[derive(Debug)]
pub struct ThemeStore {
    tx: watch::Sender<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn set(&self, theme: Theme) {
        self.tx.send_replace(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn palette(&self) -> Palette {
        self.current().palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let store = ThemeStore::new(Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette().text, Theme::Light.palette().text);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let theme: Theme = serde_yaml::from_str("light").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}

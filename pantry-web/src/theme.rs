//! Light/dark theme, the one piece of client state that outlives a session.
//!
//! The choice is stored under a single localStorage key and re-applied on
//! load, falling back to the OS-level color-scheme preference when unset.

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Resolve the theme to start with: stored choice, then OS preference,
/// then light. Returns the default when there is no window (SSR).
pub fn initial_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };

    if let Ok(Some(storage)) = window.local_storage()
        && let Ok(Some(saved)) = storage.get_item(STORAGE_KEY)
        && let Some(theme) = Theme::parse(&saved)
    {
        return theme;
    }

    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) if query.matches() => Theme::Dark,
        _ => Theme::default(),
    }
}

/// Record the current choice. Storage failures (private mode, quota) are
/// ignored; the theme still applies for the session.
pub fn persist_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

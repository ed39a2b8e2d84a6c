//! Shared light/dark preference.

use dashboard_common::Theme;
use tokio::sync::watch;

pub struct ThemeContext {
    theme: watch::Sender<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (theme, _) = watch::channel(initial);
        Self { theme }
    }

    pub fn current(&self) -> Theme {
        *self.theme.borrow()
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&self) -> Theme {
        let mut theme = Theme::default();
        self.theme.send_modify(|current| {
            *current = current.toggled();
            theme = *current;
        });
        tracing::debug!(%theme, "Theme toggled");
        theme
    }

    pub fn set(&self, theme: Theme) {
        self.theme.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

//! Theme manager: resolve, apply, persist, and follow the system scheme

use std::time::Duration;

use super::{PreferenceStore, Theme};
use crate::page::{ids, Document};

/// How long transitions stay off after the first paint
pub const TRANSITION_WINDOW: Duration = Duration::from_millis(100);

/// The OS-level `prefers-color-scheme` query
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

/// A system preference fixed by configuration
#[derive(Debug, Clone, Copy)]
pub struct FixedSystemPreference(pub Theme);

impl SystemPreference for FixedSystemPreference {
    fn prefers_dark(&self) -> bool {
        self.0 == Theme::Dark
    }
}

pub struct ThemeManager<S, P> {
    store: S,
    system: P,
    current: Theme,
}

impl<S: PreferenceStore, P: SystemPreference> ThemeManager<S, P> {
    /// Resolve the starting theme: stored preference, else the system's
    pub fn new(store: S, system: P) -> Self {
        let mut manager = Self {
            store,
            system,
            current: Theme::Light,
        };
        manager.current = manager
            .stored()
            .unwrap_or_else(|| Theme::from_prefers_dark(manager.system.prefers_dark()));
        manager
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The persisted preference; unreadable storage counts as none
    pub fn stored(&self) -> Option<Theme> {
        match self.store.get() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Cannot read theme preference: {}", e);
                None
            }
        }
    }

    /// Apply the resolved theme and suppress transitions for the first paint
    pub fn init(&mut self, doc: &mut Document) {
        self.apply(doc, self.current);
        doc.root.transitions_suppressed = true;
    }

    /// Set the root attribute and icon, then persist
    pub fn apply(&mut self, doc: &mut Document, theme: Theme) {
        doc.root.set_attribute("data-theme", theme.as_str());
        self.current = theme;
        doc.set_text(ids::THEME_ICON, theme.icon());

        if let Err(e) = self.store.set(theme) {
            tracing::warn!("Cannot save theme preference: {}", e);
        }
    }

    pub fn toggle(&mut self, doc: &mut Document) -> Theme {
        let next = self.current.toggled();
        self.apply(doc, next);
        next
    }

    /// Follow a system scheme change unless a preference is stored
    pub fn on_system_change(&mut self, doc: &mut Document, prefers_dark: bool) -> bool {
        if self.stored().is_some() {
            return false;
        }
        self.apply(doc, Theme::from_prefers_dark(prefers_dark));
        true
    }
}

/// Re-enable transitions once the first-paint window has passed
pub async fn settle_first_paint(doc: &mut Document) {
    if doc.root.transitions_suppressed {
        tokio::time::sleep(TRANSITION_WINDOW).await;
        doc.root.transitions_suppressed = false;
    }
}

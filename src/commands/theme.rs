//! Inspect and change the persisted theme preference

use anyhow::Result;

use crate::page::Document;
use crate::theme::{FixedSystemPreference, PreferenceStore, Theme, ThemeManager};
use crate::BlogViewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
    Clear,
}

pub fn run(viewer: &BlogViewer, action: ThemeAction, system: Option<Theme>) -> Result<()> {
    let system = FixedSystemPreference(system.unwrap_or(viewer.config.system_theme));
    let report = execute(viewer.theme_store(), system, action)?;
    println!("{}", report);
    Ok(())
}

/// Run an action against a store and describe the outcome
pub fn execute<S: PreferenceStore>(
    store: S,
    system: FixedSystemPreference,
    action: ThemeAction,
) -> Result<String> {
    let mut manager = ThemeManager::new(store, system);
    let mut doc = Document::list_page("");

    let report = match action {
        ThemeAction::Show => match manager.stored() {
            Some(theme) => format!("{} (saved preference)", theme),
            None => format!("{} (system preference)", manager.current()),
        },
        ThemeAction::Toggle => {
            manager.init(&mut doc);
            let theme = manager.toggle(&mut doc);
            format!("Switched to {} {}", theme, theme.icon())
        }
        ThemeAction::Set(theme) => {
            manager.apply(&mut doc, theme);
            format!("Theme set to {} {}", theme, theme.icon())
        }
        ThemeAction::Clear => {
            manager.store_mut().clear()?;
            format!("Preference cleared, following the system theme ({})", system.0)
        }
    };

    Ok(report)
}

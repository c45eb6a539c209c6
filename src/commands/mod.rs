//! CLI commands

pub mod list;
pub mod post;
pub mod search;
pub mod theme;

use crate::page::Document;
use crate::theme::{FixedSystemPreference, ThemeManager};
use crate::BlogViewer;

/// Give a rendered page the saved theme, as the browser would on load
pub(crate) fn apply_theme(viewer: &BlogViewer, doc: &mut Document) {
    let system = FixedSystemPreference(viewer.config.system_theme);
    let mut manager = ThemeManager::new(viewer.theme_store(), system);
    manager.init(doc);
}

//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot a rendered definitions document
pub fn assert_definitions_snapshot(name: &str, rendered: &str) {
    with_settings(|| {
        assert_snapshot!(name, rendered);
    });
}

/// Snapshot an error as rendered for the terminal
pub fn assert_error_snapshot(name: &str, error: &str) {
    with_settings(|| {
        assert_snapshot!(name, error);
    });
}

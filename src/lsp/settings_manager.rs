//! Settings snapshot management for the LSP server.
//!
//! Settings come from `initializationOptions` and later
//! `workspace/didChangeConfiguration` payloads. Each format request loads
//! one snapshot, so a request's flag vector is internally consistent even
//! if settings change while the request is in flight. Nothing is cached
//! across requests beyond the last applied value.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::FormatterSettings;

/// Thread-safe holder of the current formatter settings.
///
/// `ArcSwap` gives lock-free snapshot reads on the request path and atomic
/// replacement when the client pushes new configuration.
pub(crate) struct SettingsManager {
    settings: ArcSwap<FormatterSettings>,
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("settings", &self.settings.load())
            .finish()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManager {
    pub(crate) fn new() -> Self {
        Self {
            settings: ArcSwap::new(Arc::new(FormatterSettings::default())),
        }
    }

    /// Load the current settings snapshot.
    pub(crate) fn load(&self) -> Arc<FormatterSettings> {
        self.settings.load_full()
    }

    /// Replace the current settings.
    pub(crate) fn apply(&self, settings: FormatterSettings) {
        self.settings.store(Arc::new(settings));
    }

    /// Parse a client-supplied JSON value and apply it if well-formed.
    ///
    /// Malformed or non-object payloads leave the previous settings in
    /// place; returns whether anything was applied.
    pub(crate) fn apply_client_value(&self, value: &serde_json::Value) -> bool {
        match FormatterSettings::from_client_value(value) {
            Some(settings) => {
                self.apply(settings);
                true
            }
            None => false,
        }
    }
}

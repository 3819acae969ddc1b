//! Formatter settings.
//!
//! Mirrors the configuration section of the original editor extension:
//! camelCase keys, all optional, read fresh on every format request. The
//! section may arrive bare or namespaced under `"jsonnet-formatter"` in
//! `initializationOptions` or a `workspace/didChangeConfiguration` payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration key under which clients namespace the settings section.
pub const CONFIG_SECTION: &str = "jsonnet-formatter";

/// User-facing formatter settings.
///
/// Defaults follow jsonnetfmt's own defaults, except `indent`, where `0`
/// means "defer to the editor's tab size for the request".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterSettings {
    /// Formatter binary to invoke; resolved via PATH unless absolute.
    pub executable: String,
    /// Spaces per indent level; `0` defers to the editor tab size.
    pub indent: u32,
    /// Maximum consecutive blank lines to preserve.
    pub max_blank_lines: u32,
    /// Preferred quote style; only the first character is passed through.
    pub string_style: String,
    /// Preferred comment style; only the first character is passed through.
    pub comment_style: String,
    /// Emit unquoted field names where legal.
    pub pretty_field_names: bool,
    /// Insert padding inside array brackets.
    pub pad_arrays: bool,
    /// Insert padding inside object braces.
    pub pad_objects: bool,
    /// Reorder import statements.
    pub sort_imports: bool,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            executable: "jsonnetfmt".to_string(),
            indent: 0,
            max_blank_lines: 2,
            string_style: "l".to_string(),
            comment_style: "l".to_string(),
            pretty_field_names: true,
            pad_arrays: false,
            pad_objects: false,
            sort_imports: true,
        }
    }
}

impl FormatterSettings {
    /// Parse settings from a client-supplied JSON value.
    ///
    /// Accepts either the bare settings object or one wrapped in the
    /// `"jsonnet-formatter"` section. Unknown keys are ignored; a value that
    /// is not an object yields `None` so the caller can keep the previous
    /// settings.
    pub fn from_client_value(value: &Value) -> Option<Self> {
        let section = match value.get(CONFIG_SECTION) {
            Some(section) => section,
            None => value,
        };
        if !section.is_object() {
            return None;
        }
        match serde_json::from_value(section.clone()) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!(
                    target: "jsonnetfmt_ls::config",
                    "Ignoring malformed settings: {err}"
                );
                None
            }
        }
    }
}

//! Formatting pipeline: settings to flags, flags to a child process, child
//! output to minimal text edits.

mod edits;
mod flags;
mod invoke;

pub use edits::compute_text_edits;
pub use flags::build_args;
pub use invoke::run_formatter;

use tower_lsp::lsp_types::{FormattingOptions, TextEdit};

use crate::config::FormatterSettings;
use crate::error::FormatResult;

/// Format a document's text and return the edits that produce the result.
///
/// The whole pipeline for one request: build the flag vector from the
/// settings snapshot, pipe the text through the external formatter, then
/// diff old against new. Fails with the invoker's error untransformed;
/// there is no partial success.
pub async fn format_document(
    text: &str,
    options: &FormattingOptions,
    settings: &FormatterSettings,
) -> FormatResult<Vec<TextEdit>> {
    let args = build_args(options, settings);
    log::debug!(
        target: "jsonnetfmt_ls::formatting",
        "Running {} {}",
        settings.executable,
        args.join(" ")
    );
    let formatted = run_formatter(&settings.executable, &args, text).await?;
    Ok(compute_text_edits(text, &formatted))
}

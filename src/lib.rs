//! jsonnetfmt-ls: a Language Server Protocol server that formats Jsonnet
//! documents by piping them through the external `jsonnetfmt` binary.
//!
//! The server is deliberately thin glue: settings become a flag vector,
//! the document text goes through one child process per request, and the
//! formatted output is diffed against the original to produce minimal
//! text edits.

pub mod config;
pub mod document;
pub mod error;
pub mod fmt;
pub mod lsp;

pub use config::FormatterSettings;
pub use error::{FormatError, FormatResult};
pub use fmt::{build_args, compute_text_edits, format_document, run_formatter};
pub use lsp::JsonnetFmtLs;

//! The `LanguageServer` implementation.
//!
//! Thin glue between the LSP surface and the formatting pipeline: document
//! synchronization keeps the store current, configuration payloads feed the
//! settings manager, and `textDocument/formatting` runs one external
//! formatter process per request. Errors from the pipeline pass through to
//! the client as JSON-RPC errors; the client decides how to present them.

use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::document::DocumentStore;
use crate::fmt::format_document;
use crate::lsp::settings_manager::SettingsManager;

pub struct JsonnetFmtLs {
    client: Client,
    documents: DocumentStore,
    settings: SettingsManager,
}

impl std::fmt::Debug for JsonnetFmtLs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonnetFmtLs")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl JsonnetFmtLs {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            settings: SettingsManager::new(),
        }
    }
}

/// Run the formatting pipeline for one stored document.
///
/// Kept outside the trait impl so it can be exercised without a live
/// client. A missing document yields `Ok(None)`; pipeline failures map to
/// an internal error whose message carries the formatter's exit code and
/// stderr verbatim.
pub(crate) async fn format_stored_document(
    documents: &DocumentStore,
    settings: &SettingsManager,
    uri: &Url,
    options: &FormattingOptions,
) -> Result<Option<Vec<TextEdit>>> {
    let Some(text) = documents.get_text(uri) else {
        log::debug!(target: "jsonnetfmt_ls::formatting", "No document for {uri}");
        return Ok(None);
    };

    // One snapshot per request keeps the flag vector internally consistent.
    let settings = settings.load();

    match format_document(&text, options, &settings).await {
        Ok(edits) => Ok(Some(edits)),
        Err(err) => {
            log::warn!(target: "jsonnetfmt_ls::formatting", "{err}");
            Err(Error {
                code: ErrorCode::InternalError,
                message: err.to_string().into(),
                data: None,
            })
        }
    }
}

/// Extract the new full text from a full-sync change set.
///
/// The server advertises `TextDocumentSyncKind::FULL`, so the last change
/// in the list is the complete document.
pub(crate) fn full_sync_text(mut changes: Vec<TextDocumentContentChangeEvent>) -> Option<String> {
    changes.pop().map(|change| change.text)
}

#[tower_lsp::async_trait]
impl LanguageServer for JsonnetFmtLs {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = params.initialization_options {
            if self.settings.apply_client_value(&options) {
                log::info!(
                    target: "jsonnetfmt_ls::config",
                    "Applied settings from initialization options"
                );
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                document_formatting_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "jsonnetfmt-ls ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.documents.insert(doc.uri, doc.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Some(text) = full_sync_text(params.content_changes) {
            self.documents.insert(params.text_document.uri, text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        if self.settings.apply_client_value(&params.settings) {
            log::info!(
                target: "jsonnetfmt_ls::config",
                "Applied settings from client configuration"
            );
        }
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        format_stored_document(
            &self.documents,
            &self.settings,
            &params.text_document.uri,
            &params.options,
        )
        .await
    }
}

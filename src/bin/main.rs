use clap::Parser;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use jsonnetfmt_ls::JsonnetFmtLs;

/// LSP server formatting Jsonnet documents through the external jsonnetfmt binary
#[derive(Parser)]
#[command(name = "jsonnetfmt-ls")]
#[command(version)]
#[command(about = "LSP server formatting Jsonnet documents through jsonnetfmt")]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    // stdout carries the LSP channel; env_logger writes to stderr.
    env_logger::init();

    let stdin = stdin();
    let stdout = stdout();

    let (service, socket) = LspService::new(JsonnetFmtLs::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}

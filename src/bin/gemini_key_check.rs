//! gemini-key-check — 验证 Gemini API 密钥的命令行工具
//!
//! Usage:
//!   gemini-key-check              Run the check (key from keyring or environment)
//!   gemini-key-check --version    Show version information
//!   gemini-key-check --help       Show help
//!
//! The process exits 0 whether or not the key works; read the printed line.

use anyhow::Context;
use gemini_key_check::{key_check, KeyCheckConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => {}
        Some("version" | "--version" | "-V") => {
            cmd_version();
            return Ok(());
        }
        Some("help" | "--help" | "-h") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown argument: {other}");
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    init_tracing();

    let config = KeyCheckConfig::from_env();
    let mut stdout = std::io::stdout();
    key_check::run(config, &mut stdout)
        .await
        .context("failed to write key check report")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const USAGE: &str = r#"gemini-key-check — verify a Gemini API key

USAGE:
    gemini-key-check [--help | --version]

Sends one generateContent request and prints SUCCESS or ERROR.

ENVIRONMENT:
    GOOGLE_API_KEY / GEMINI_API_KEY   API key (the OS keyring entry
                                      gemini-key-check/gemini is tried first)
    GEMINI_MODEL                      Model id (default gemini-2.5-flash-lite)
    GEMINI_BASE_URL                   API root (default https://generativelanguage.googleapis.com/v1beta)
    AI_HTTP_TIMEOUT_SECS              Request timeout in seconds (default none)
    AI_PROXY_URL                      Proxy for all requests
    RUST_LOG                          Diagnostic log filter on stderr (default warn)"#;

fn cmd_version() {
    println!("gemini-key-check {}", env!("CARGO_PKG_VERSION"));
}

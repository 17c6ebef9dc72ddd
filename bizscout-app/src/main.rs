use anyhow::Result;
use bizscout_common::observability::{LogConfig, LogFormat, init_logging};
use bizscout_config::{BizscoutConfig, BizscoutConfigLoader};
use bizscout_search::{SearchBackend, SearchClient, SearchQuery};
use bizscout_view::{html, render, text};
use clap::Parser;
use cli::{Cli, Format};
use std::sync::Arc;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(&cli)?;
    let log_path = init_logging(log_config(&cli, &cfg))?;

    tracing::info!(
        backend = %cfg.backend.base_url,
        log = %log_path.display(),
        "bizscout starting"
    );

    let client = SearchClient::new(&cfg.backend.base_url)?;

    match (cli.location, cli.term) {
        (Some(location), Some(term)) => one_shot(client, location, term, cli.format).await,
        (None, None) => bizscout_tui::run(Arc::new(client)).await,
        _ => anyhow::bail!("--location and --term must be given together"),
    }
}

fn load_config(cli: &Cli) -> Result<BizscoutConfig> {
    let loader = match &cli.config {
        Some(path) => BizscoutConfigLoader::new().with_file(path),
        None => BizscoutConfigLoader::new().with_optional_file("bizscout.yaml"),
    };
    Ok(loader.load()?)
}

fn log_config(cli: &Cli, cfg: &BizscoutConfig) -> LogConfig {
    let log = cfg.log.as_ref();
    LogConfig {
        app_name: "bizscout",
        log_dir: cli
            .log_dir
            .clone()
            .or_else(|| log.and_then(|l| l.dir.as_ref().map(Into::into))),
        emit_stderr: log.and_then(|l| l.stderr).unwrap_or(false),
        format: log
            .and_then(|l| l.format.as_deref())
            .map(LogFormat::from_name)
            .unwrap_or(LogFormat::Text),
        default_filter: log
            .and_then(|l| l.filter.clone())
            .unwrap_or_else(|| "info".into()),
    }
}

/// Run one search and print the rendered view; non-zero exit only when the
/// exchange itself failed.
async fn one_shot(client: SearchClient, location: String, term: String, format: Format) -> Result<()> {
    let query = SearchQuery::new(location, term);
    let outcome = client.search(&query).await;
    let failed = outcome.is_err();

    let state = render(outcome);
    let page = match format {
        Format::Text => text::render(&state),
        Format::Html => html::fragment(&state),
    };
    println!("{page}");

    if failed {
        anyhow::bail!("search did not complete");
    }
    Ok(())
}

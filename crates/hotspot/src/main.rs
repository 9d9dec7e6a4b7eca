mod cli;
mod config;
mod output;
mod processors;
mod store;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use cli::{CacheCommands, Cli, Commands, FetchArgs, OutputFormat};
use config::Config;
use github_source::GitHubClient;
use importer_core::{BatchImporter, ImportConfig, RepoId};
use output::{output_error, output_info};
use processors::{HotspotProcessor, StoreProcessor};
use std::process::ExitCode;
use store::{IssueStore, StoredIssueSource};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(*shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.url.clone(), cli.token.clone(), cli.cache_dir.clone());

    let store = IssueStore::new(config.cache_root());

    match &cli.command {
        Commands::Scan { repo, fetch } => handle_scan(&config, cli.format, repo, fetch),
        Commands::Fetch { repo, fetch } => {
            handle_fetch(&store, &config, cli.format, repo, fetch)
        }
        Commands::Replay { repo } => handle_replay(&store, cli.format, repo),
        Commands::Cache { action } => handle_cache(&store, action, cli.format),
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

/// Live import feeding the hotspot report
fn handle_scan(
    config: &Config,
    format: OutputFormat,
    repo: &str,
    fetch: &FetchArgs,
) -> Result<()> {
    let repo = parse_repo(repo)?;
    let client = live_client(config, fetch);
    let mut processor = HotspotProcessor::new(format);

    let import = ImportConfig::new(repo)
        .with_max_pages(fetch.max_pages.unwrap_or_else(|| config.max_pages()));
    BatchImporter::new(&client, &mut processor, import).run()?;
    Ok(())
}

/// Live import into the local cache; a cached repository is left alone
fn handle_fetch(
    store: &IssueStore,
    config: &Config,
    format: OutputFormat,
    repo: &str,
    fetch: &FetchArgs,
) -> Result<()> {
    let repo = parse_repo(repo)?;

    if store.exists(&repo) {
        output_info(
            &format!(
                "{} is already cached at {}; skipping import",
                repo,
                store.issues_path(&repo).display()
            ),
            format,
        );
        return Ok(());
    }

    let client = live_client(config, fetch);
    let mut processor = StoreProcessor::new(store, format);

    let import = ImportConfig::new(repo)
        .with_max_pages(fetch.max_pages.unwrap_or_else(|| config.max_pages()));
    BatchImporter::new(&client, &mut processor, import).run()?;
    Ok(())
}

/// Offline import from the cache feeding the hotspot report
fn handle_replay(store: &IssueStore, format: OutputFormat, repo: &str) -> Result<()> {
    let repo = parse_repo(repo)?;
    let source = StoredIssueSource::new(store);
    let mut processor = HotspotProcessor::new(format);

    BatchImporter::new(&source, &mut processor, ImportConfig::new(repo)).run()?;
    Ok(())
}

fn handle_cache(store: &IssueStore, action: &CacheCommands, format: OutputFormat) -> Result<()> {
    match action {
        CacheCommands::Path => {
            println!("{}", store.root().display());
            Ok(())
        }
        CacheCommands::Clear { repo } => {
            let repo = parse_repo(repo)?;
            store.clear(&repo)?;
            output_info(&format!("Removed cached issues for {}", repo), format);
            Ok(())
        }
    }
}

fn live_client(config: &Config, fetch: &FetchArgs) -> GitHubClient {
    let mut client = GitHubClient::with_base_url(config.api_url(), config.token.as_deref())
        .state(fetch.state.as_str());
    if let Some(per_page) = fetch.per_page {
        client = client.per_page(per_page);
    }
    client
}

fn parse_repo(repo: &str) -> Result<RepoId> {
    match repo.split('/').collect::<Vec<_>>().as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepoId::new(repo)),
        _ => Err(anyhow!(
            "Invalid repository '{}'. Expected \"owner/name\".",
            repo
        )),
    }
}

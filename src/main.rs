use anyhow::Context;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use jira_workload::analyze::{Analyzer, DataAnalysis};
use jira_workload::jira::{JiraClient, JiraIssue, JiraSearcher};
use jira_workload::logging;
use jira_workload::model::{Catalog, Config, Error};
use jira_workload::report::{RenderOptions, RenderStyle, TextReport};
use jira_workload::utils::{MultiProgressNew, ProgressStyleTemplate};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_MISSING_EXIT_CODE: u8 = 25;

/// Workload and blocker report for a JQL query.
#[derive(Parser, Debug, Clone)]
#[command(name = "jira-workload")]
struct Args {
    /// Show debug output
    #[arg(long)]
    debug: bool,
    /// Uncolorize output
    #[arg(long = "no-color")]
    no_color: bool,
    /// Show blockers
    #[arg(long)]
    links: bool,
    /// Use markup in output
    #[arg(long)]
    markup: bool,
    /// Show only active/open issues in the list
    #[arg(long)]
    active: bool,
    /// Max amount of results per query
    #[arg(long, default_value_t = 50)]
    results: usize,
    /// Config file, defaults to ~/.jira.json
    #[arg(long = "config")]
    config_path: Option<PathBuf>,
    /// Jira query string
    jql: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.debug);
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::ConfigMissing { .. }) = err.downcast_ref::<Error>() {
                println!("{err}");
                return ExitCode::from(CONFIG_MISSING_EXIT_CODE);
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let config_path = match &args.config_path {
        Some(path) => path.clone(),
        None => Config::default_path().context("Cannot resolve home directory")?,
    };
    let config = Config::from_config(&config_path)?;
    let client = JiraClient::new(config)?;

    let issues = jira_fetch(&client, &args.jql, args.results, args.debug)
        .await
        .context("Jira search failed")?;

    let catalog = Catalog::default();
    let mut data_analysis = DataAnalysis::new(&catalog);
    let points_field = &client.config().points_field;
    data_analysis.insert_issues(issues.iter().map(|issue| issue.snapshot(points_field)));
    let analyzed = data_analysis.analyze_workload();

    let options = RenderOptions {
        style: RenderStyle::from_flags(args.no_color, args.markup),
        active_only: args.active,
        show_links: args.links,
        host: client.config().host.clone(),
    };
    let mut stdout = std::io::stdout().lock();
    for line in analyzed.report_lines(&catalog, &options) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

async fn jira_fetch(
    client: &JiraClient,
    jql: &str,
    page_size: usize,
    debug: bool,
) -> jira_workload::model::Result<Vec<JiraIssue>> {
    let multi_progress = MultiProgress::on_stderr(debug);
    let pb = multi_progress.add_with_style(ProgressBar::new(1), ProgressStyleTemplate::page_bar());
    pb.set_message("Searching");

    let progress_pb = pb.clone();
    let progress = move |fetched: usize, total: usize| {
        progress_pb.set_length(total as u64);
        progress_pb.set_position(fetched as u64);
    };
    let issues = client.search_issues(jql, page_size, Box::new(progress)).await;

    pb.set_style(ProgressStyleTemplate::only_message());
    match &issues {
        Ok(issues) => pb.finish_with_message(format!(
            "✅ Completed search (find {} issues)",
            issues.len()
        )),
        Err(_) => pb.abandon_with_message("Search failed"),
    }
    issues
}

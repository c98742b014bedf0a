//! wsa-removal: operator CLI for WorkSpaces application removal
//!
//! Runs the same removal as the Lambda function from a workstation, with an
//! optional dry run, and lists application ids to configure it with.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use tracing::info;
use wsa_removal::aws::{
    AwsContext, AwsSettings, FromAwsContext, WorkspacesClient, WorkspacesOperations,
    classify_anyhow_error,
};
use wsa_removal::logging;
use wsa_removal::removal::{RemovalOptions, RemovalTask};
use wsa_removal_common::defaults::{
    APP_ID_KEY, DEFAULT_APPLICATION_OWNER, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_SIZE, DIRECTORY_KEY,
    MAX_ATTEMPTS_ENV, MAX_PAGE_SIZE,
};
use wsa_removal_common::{RemovalConfig, RemovalEvent, RemovalReport};

#[derive(Parser, Debug)]
#[command(name = "wsa-removal")]
#[command(about = "Remove an application from every WorkSpace in a directory")]
#[command(version)]
struct Args {
    /// AWS region (defaults to the SDK region chain)
    #[arg(long, global = true)]
    region: Option<String>,

    /// AWS profile to use (overrides AWS_PROFILE env var)
    #[arg(long, global = true)]
    aws_profile: Option<String>,

    /// Maximum attempts per API call in standard retry mode
    #[arg(long, global = true, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    #[command(subcommand)]
    command: Command,
}

/// Arguments for the run command
#[derive(clap::Args, Debug)]
struct RunArgs {
    /// WorkSpaces directory id (falls back to $WorkspacesDirectory)
    #[arg(long)]
    directory_id: Option<String>,

    /// Application id to remove (falls back to $OfficeAppId)
    #[arg(long)]
    app_id: Option<String>,

    /// WorkSpaces per DescribeWorkspaces page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE,
          value_parser = clap::value_parser!(i32).range(1..=MAX_PAGE_SIZE as i64))]
    page_size: i32,

    /// Report matching WorkSpaces without changing them
    #[arg(long)]
    dry_run: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassociate and uninstall an application across a directory
    Run(RunArgs),

    /// List application ids available for association
    ListApplications {
        /// Application owner: AMAZON, SELF, or an account id
        #[arg(long, default_value = DEFAULT_APPLICATION_OWNER)]
        owner: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print error in a user-friendly way
fn print_error(e: &anyhow::Error) {
    eprintln!("\nError: {e}");

    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  Caused by: {cause}");
        source = cause.source();
    }

    if let Some(suggestion) = classify_anyhow_error(e).suggestion() {
        eprintln!("\nHint: {suggestion}");
    }
}

async fn run() -> Result<()> {
    logging::init_cli();
    let args = Args::parse();

    if let Some(profile) = &args.aws_profile {
        info!(profile = %profile, "Using AWS profile");
    }

    let settings = AwsSettings {
        region: args.region,
        profile: args.aws_profile,
        max_attempts: args.max_attempts,
    };
    let aws = AwsContext::load(&settings).await;
    let client = WorkspacesClient::from_context(&aws);

    match args.command {
        Command::Run(run_args) => handle_run(&client, run_args).await,
        Command::ListApplications { owner, format } => {
            handle_list_applications(&client, owner, format).await
        }
    }
}

/// Handle the run command
async fn handle_run(client: &impl WorkspacesOperations, args: RunArgs) -> Result<()> {
    let event = RemovalEvent {
        workspaces_directory: args.directory_id,
        office_app_id: args.app_id,
    };
    let config = RemovalConfig::from_env(&event);
    if config.uses_placeholder() {
        anyhow::bail!(
            "No directory or application id configured; \
             pass --directory-id/--app-id or set {DIRECTORY_KEY}/{APP_ID_KEY}"
        );
    }

    let options = RemovalOptions {
        page_size: args.page_size,
        dry_run: args.dry_run,
    };
    let mode = if options.dry_run { "DRY-RUN" } else { "EXECUTE" };
    let directory_id = config.directory_id.clone();
    let app_id = config.target_app_id.clone();

    let report = RemovalTask::new(client, config, options).run().await;

    println!("\n=== Removal Report ===");
    println!("Mode:        {mode}");
    println!("Directory:   {directory_id}");
    println!("Application: {app_id}");
    println!();
    print_report(&report);
    if args.dry_run && report.matches > 0 {
        println!();
        println!("Run without --dry-run to remove the application.");
    }

    Ok(())
}

fn print_report(report: &RemovalReport) {
    println!("WorkSpaces found:   {}", report.workspaces_found);
    if !report.listing_complete {
        println!("  (listing stopped early, see log)");
    }
    println!("WorkSpaces scanned: {}", report.workspaces_scanned);
    println!("Matches:            {}", report.matches);
    println!("  Disassociated:    {}", report.disassociated);
    println!("  Redeployed:       {}", report.redeployed);
    println!("  Skipped:          {}", report.skipped);
    println!("Failed:             {}", report.failed);
}

/// Handle the list-applications command
async fn handle_list_applications(
    client: &impl WorkspacesOperations,
    owner: String,
    format: OutputFormat,
) -> Result<()> {
    let applications = client.describe_applications(Some(owner)).await?;

    if applications.is_empty() {
        println!("No applications found.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = applications
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "application_id": a.application_id,
                        "name": a.name,
                        "owner": a.owner,
                        "state": a.state,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["APPLICATION ID", "NAME", "OWNER", "STATE"]);
            for a in &applications {
                table.add_row(vec![
                    a.application_id.clone(),
                    a.name.clone().unwrap_or_default(),
                    a.owner.clone().unwrap_or_default(),
                    a.state.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
            println!("\nTotal: {} applications", applications.len());
        }
    }

    Ok(())
}

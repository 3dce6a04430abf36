//! Koi CLI - booking, trip and fish-order workflow checks over API snapshots

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use koi_workflow::aggregate::SortOrder;
use koi_workflow::cli::commands::list::ListOptions;
use koi_workflow::cli::commands::{self, Workspace};
use koi_workflow::cli::{Cli, Commands};
use koi_workflow::errors::to_exit_code;
use koi_workflow::KoiError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => Err(KoiError::Interrupted),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> koi_workflow::Result<()> {
    let Some(command) = cli.command else {
        // Default to showing help - clap handles this
        println!("Use --help for usage information");
        return Ok(());
    };
    let open = || Workspace::open(cli.cwd.as_deref(), cli.data_dir.as_deref());

    match command {
        Commands::Statuses { kind, json } => commands::statuses::run(kind, json).await,
        Commands::Check {
            kind,
            id,
            status,
            as_role,
            json,
        } => commands::check::run(&open()?, kind, id, &status, as_role, json).await,
        Commands::SetStatus {
            kind,
            id,
            status,
            as_role,
        } => commands::set_status::run(&open()?, kind, id, &status, as_role).await,
        Commands::Assign {
            booking_id,
            slot,
            account_id,
        } => commands::assign::run(&open()?, booking_id, slot, account_id).await,
        Commands::List {
            kind,
            search,
            sort,
            desc,
            page,
            json,
        } => {
            let ws = open()?;
            let opts = ListOptions {
                search,
                sort,
                order: if desc { SortOrder::Desc } else { SortOrder::Asc },
                page,
                page_size: ws.config.page_size,
            };
            commands::list::run(&ws, kind, opts, json).await
        }
        Commands::Summary { json } => commands::summary::run(&open()?, json).await,
        Commands::Export { kind, output } => {
            commands::export::run(&open()?, kind, output.as_deref()).await
        }
        Commands::Config => commands::config::run(&open()?).await,
    }
}

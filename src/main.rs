//! CLI entry point for zettel-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zettel_site::{commands, Site};

#[derive(Parser)]
#[command(name = "zettel-site")]
#[command(version)]
#[command(about = "Build and browse a single-page site from zettelkasten notes", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Zettel directory (overrides ZETTEL_DIR and _config.yml)
    #[arg(short, long, global = true)]
    zettel: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (section, post)
        #[arg(default_value = "section")]
        r#type: String,
    },

    /// Browse the notes headlessly, one hash location per step
    Browse {
        /// Locations such as `#/00-fly/idea`; read from stdin when omitted
        hashes: Vec<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "zettel_site=debug,info"
    } else {
        "zettel_site=info"
    };

    // Logs go to stderr so `browse` and `list` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let zettel_override = cli.zettel;
    let open_site = || match &zettel_override {
        Some(dir) => Site::with_zettel_dir(&base_dir, Some(dir.clone())),
        None => Site::new(&base_dir),
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = commands::init::target_dir(&base_dir, &folder);
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let site = open_site()?;
            tracing::info!("Generating static files...");

            site.generate()?;
            println!("Generated successfully!");

            if watch {
                commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = open_site()?;

            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            zettel_site::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = open_site()?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = open_site()?;
            commands::list::run(&site, &r#type)?;
        }

        Commands::Browse { hashes } => {
            let site = open_site()?;
            commands::browse::run(&site, &hashes)?;
        }

        Commands::Version => {
            println!("zettel-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

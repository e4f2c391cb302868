//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A static site generator for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

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

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// Site-relative URL of the post (defaults to /blog/<slug>)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Disable regeneration and live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the generated output
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, redirect)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let site = folio::Folio::new(&base_dir)?;
            site.new_post(&title, path.as_deref())?;
        }

        Commands::Generate { watch } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || folio::commands::generate::watch(&site))
                    .await??;
            }
        }

        Commands::Server { port, ip, r#static } => {
            let site = folio::Folio::new(&base_dir)?;
            site.generate()?;
            folio::server::start(&site, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let site = folio::Folio::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

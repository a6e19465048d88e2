//! Emergence CLI
//!
//! Serves and prerenders robots.txt and sitemap.xml for the exhibit site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the exhibit site.
#[derive(Parser)]
#[command(
    name = "emergence",
    version,
    about = "Serve and export the Emergence exhibit site metadata"
)]
struct Cli {
    /// Path to configuration file [default: site.toml when present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve robots.txt, sitemap.xml and static assets over HTTP
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory of static assets
        #[arg(long)]
        static_dir: Option<String>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Write robots.txt and sitemap.xml to a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "build")]
        output: PathBuf,
    },
    /// Print asset paths prefixed with the deployment base path
    Resolve {
        /// Asset paths (e.g., images/hero.jpg)
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Validate configuration and generated documents
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    emergence::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
            open,
        } => {
            let mut config = emergence::cmd::load_config(cli.config.as_deref())?;
            if let Some(h) = host {
                config.server.host = h;
            }
            if let Some(p) = port {
                config.server.port = p;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }
            emergence::cmd::serve::run(&config, open).await?;
        }
        Commands::Build { output } => {
            let config = emergence::cmd::load_config(cli.config.as_deref())?;
            emergence::cmd::build::run(&config, &output)?;
        }
        Commands::Resolve { paths } => {
            let config = emergence::cmd::load_config(cli.config.as_deref())?;
            emergence::cmd::resolve::run(&config, &paths);
        }
        Commands::Check { strict } => {
            emergence::cmd::check::run(cli.config.as_deref(), strict)?;
        }
    }

    Ok(())
}

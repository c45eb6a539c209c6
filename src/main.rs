//! CLI entry point for blog-viewer

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_viewer::catalog::Criteria;
use blog_viewer::commands::theme::ThemeAction;
use blog_viewer::source::Source;
use blog_viewer::theme::Theme;
use blog_viewer::BlogViewer;

#[derive(Parser)]
#[command(name = "blog-viewer")]
#[command(version)]
#[command(about = "Browse, search, and read a static markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Site directory or http(s) base URL, overriding `_viewer.yml`
    #[arg(short, long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, optionally searched and filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to look for
        #[arg(short, long)]
        query: Option<String>,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print the rendered list page
        #[arg(long)]
        html: bool,
    },

    /// Ranked search over the catalog
    Search {
        query: Option<String>,

        /// Read queries from stdin as they are typed
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show a single post
    Post {
        /// Post file as listed in posts.json
        file: Option<String>,

        /// A post page URL carrying `?file=`
        #[arg(short, long)]
        url: Option<String>,

        /// Print the rendered post page
        #[arg(long)]
        html: bool,
    },

    /// Show or change the light/dark preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,

        /// Stand-in for the OS color scheme
        #[arg(long, value_enum, global = true)]
        system: Option<SchemeArg>,
    },

    /// Serve the site directory for a browser preview
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum ThemeCommand {
    Show,
    Toggle,
    Set {
        #[arg(value_enum)]
        theme: SchemeArg,
    },
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for Theme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => Theme::Light,
            SchemeArg::Dark => Theme::Dark,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_viewer=debug,info"
    } else {
        "blog_viewer=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if let Commands::Version = cli.command {
        println!("blog-viewer version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let viewer = BlogViewer::new(&base_dir)?.with_source(cli.source);

    match cli.command {
        Commands::List {
            query,
            category,
            tag,
            html,
        } => {
            let criteria = Criteria {
                query,
                category,
                tag,
            };
            blog_viewer::commands::list::run(&viewer, &criteria, html).await?;
        }

        Commands::Search { query, interactive } => {
            blog_viewer::commands::search::run(&viewer, query.as_deref(), interactive).await?;
        }

        Commands::Post { file, url, html } => {
            blog_viewer::commands::post::run(&viewer, file.as_deref(), url.as_deref(), html)
                .await?;
        }

        Commands::Theme { action, system } => {
            let action = match action.unwrap_or(ThemeCommand::Show) {
                ThemeCommand::Show => ThemeAction::Show,
                ThemeCommand::Toggle => ThemeAction::Toggle,
                ThemeCommand::Set { theme } => ThemeAction::Set(theme.into()),
                ThemeCommand::Clear => ThemeAction::Clear,
            };
            blog_viewer::commands::theme::run(&viewer, action, system.map(Theme::from))?;
        }

        Commands::Serve { port, ip } => {
            let root = match viewer.source()? {
                Source::Dir(dir) => dir.root().to_path_buf(),
                Source::Http(_) => {
                    anyhow::bail!("Only a local site directory can be served")
                }
            };
            let ip = ip.unwrap_or_else(|| viewer.config.server.ip.clone());
            let port = port.unwrap_or(viewer.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog_viewer::server::start(root, &ip, port).await?;
        }

        Commands::Version => {}
    }

    Ok(())
}

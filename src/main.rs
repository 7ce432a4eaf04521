//! CLI entry point for albumshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use albumshelf::catalog::AlbumFilter;
use albumshelf::commands::new::NewAlbum;

#[derive(Parser)]
#[command(name = "albumshelf")]
#[command(version)]
#[command(about = "A static site generator for a ranked album shelf", long_about = None)]
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
    /// Initialize a new album site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new album file
    New {
        /// Album title, also used to derive the file name
        title: String,

        #[arg(short, long)]
        artist: Option<String>,

        #[arg(short, long)]
        year: Option<i64>,

        /// Position on the shelf (1 is first)
        #[arg(short, long)]
        ranking: Option<i64>,

        /// Cover image path or URL
        #[arg(long)]
        cover: Option<String>,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
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

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Disable file watching and live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// What to list (albums, tags, routes)
        #[arg(default_value = "albums")]
        r#type: String,

        /// Case-insensitive search on title or artist
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only albums carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "albumshelf=debug,info"
    } else {
        "albumshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing album site in {:?}", target_dir);
            albumshelf::commands::init::init_site(&target_dir)?;
            println!("Initialized album site in {:?}", target_dir);
        }

        Commands::New {
            title,
            artist,
            year,
            ranking,
            cover,
            tags,
        } => {
            let site = albumshelf::Site::new(&base_dir)?;
            let path = albumshelf::commands::new::create_album(
                &site,
                NewAlbum {
                    title,
                    artist,
                    year,
                    ranking,
                    cover,
                    tags: tags.into_iter().map(|t| t.trim().to_string()).collect(),
                },
            )?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { watch } => {
            let site = albumshelf::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                albumshelf::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = albumshelf::Site::new(&base_dir)?;

            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            albumshelf::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = albumshelf::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, query, tag } => {
            let site = albumshelf::Site::new(&base_dir)?;
            let mut filter = AlbumFilter::new().with_query(query);
            if let Some(tag) = tag {
                filter.select_tag(tag);
            }
            albumshelf::commands::list::run(&site, &r#type, &filter)?;
        }

        Commands::Version => {
            println!("albumshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

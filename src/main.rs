//! CLI entry point for blog-index

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_index::commands::new::NewPost;

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Renders a blog listing page from markdown posts", long_about = None)]
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
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Short description shown in the listing
        #[arg(long, default_value = "")]
        description: String,

        /// Tag to add (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Pin the post to the top of the listing
        #[arg(long)]
        pinned: bool,

        /// File name for the new post, without extension
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate the listing page
    #[command(alias = "g")]
    Generate,

    /// Start a preview server that renders the listing per request
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List posts in display order
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
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

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            blog_index::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            description,
            tags,
            pinned,
            path,
        } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let file = blog_index::commands::new::create_post(
                &blog,
                NewPost {
                    title,
                    description,
                    tags,
                    pinned,
                    path,
                },
            )?;
            println!("Created: {:?}", file);
        }

        Commands::Generate => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Generating listing...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog_index::server::start(&blog, &ip, port).await?;
        }

        Commands::Clean => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::run(&blog)?;
        }

        Commands::Version => {
            println!("blog-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use berita_analytics::text::NO_TRENDING_MESSAGE;
use berita_analytics::{render_pass, FilterCriteria, PageCursor, RenderOptions, Trending};
use berita_core::config::{load_config, AppConfig};
use berita_core::{load_table, ArticleSource, Result};
use berita_web::{create_app, AppState};
use clap::Parser;
use tracing::info;

use logging::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dashboard Berita Kesehatan", long_about = None)]
pub struct Cli {
    /// TOML config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Document store: mongodb (default), json or memory")]
    storage: Option<String>,
    #[arg(long, global = true, help = "Connection string, or the document file for --storage json")]
    backend_url: Option<String>,
    #[arg(long, global = true)]
    database: Option<String>,
    #[arg(long, global = true)]
    collection: Option<String>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:8501)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print totals, per-source counts and trending words
    Summary,
    /// Only verify that the document store is reachable
    Check,
}

impl Cli {
    /// Config file values with command-line flags applied on top.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(kind) = &self.storage {
            config.store.kind = kind.clone();
        }
        if let Some(url) = &self.backend_url {
            if config.store.kind.eq_ignore_ascii_case("json") {
                config.store.path = Some(PathBuf::from(url));
            } else {
                config.store.url = url.clone();
            }
        }
        if let Some(database) = &self.database {
            config.store.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            config.store.collection = collection.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Commands::Serve { bind: Some(bind) } = &self.command {
            config.server.bind = bind.clone();
        }
        Ok(config)
    }
}

async fn print_summary(source: &dyn ArticleSource) -> Result<()> {
    let table = load_table(source).await?;
    let criteria = FilterCriteria::defaults_for(&table);
    let view = render_pass(
        &table,
        &criteria,
        &mut PageCursor::default(),
        RenderOptions { with_charts: false },
    )?;

    println!("Total Artikel: {}", view.total_articles);
    println!();
    println!("Jumlah Artikel per Sumber Berita:");
    for count in &view.source_counts {
        println!("  {:<30} {}", count.source, count.count);
    }
    println!();
    println!("5 Kata Trending dari Judul Berita:");
    match &view.trending {
        Trending::Words(words) => {
            for word in words {
                println!("  {:<30} {}", word.word, word.count);
            }
        }
        Trending::Empty => println!("  {}", NO_TRENDING_MESSAGE),
    }
    println!();
    println!("{} ({} artikel)", view.page_label, view.filtered_count);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(&config.logging.level)?;

    info!("💾 Connecting to {} store...", config.store.kind);
    let source: Arc<dyn ArticleSource> = berita_storage::create_source(&config.store).await?;
    // An unreachable store is fatal; there is no retry or offline mode.
    source.ping().await?;
    info!("✨ Store reachable ({})", source.describe());

    match cli.command {
        Commands::Serve { .. } => {
            let app = create_app(AppState::new(source)).await;
            let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
            info!("📊 Dashboard listening on http://{}", config.server.bind);
            axum::serve(listener, app).await?;
        }
        Commands::Summary => print_summary(source.as_ref()).await?,
        Commands::Check => println!("ok: {}", source.describe()),
    }

    Ok(())
}

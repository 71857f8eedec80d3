use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nd_core::{CatalogSourceKind, FeedQuery, PortalConfig};
use nd_inference::{create_responder, ArticleInsights, AssistantMode};
use nd_web::AppState;
use tracing::info;

mod interactive;
mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "NewsDeep news portal", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog source: builtin, json or http
    #[arg(long, global = true)]
    catalog: Option<CatalogSourceKind>,
    /// File path or URL of the catalog
    #[arg(long, global = true)]
    catalog_location: Option<String>,
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web API
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the front page
    Feed {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        query: Option<String>,
    },
    /// Print one article
    Article { id: String },
    /// Summary points, keywords and related stories for an article
    Insights { id: String },
    /// Ask an assistant a single question
    Ask {
        message: String,
        #[arg(long)]
        article: Option<String>,
        #[arg(long, default_value = "article")]
        mode: AssistantMode,
    },
    /// Take the timed quiz for an article
    Quiz { id: String },
    /// Vote in the community poll for an article
    Poll { id: String },
    /// Join the discussion room for an article
    GroupChat { id: String },
    /// Listen to the simulated podcast for an article
    Podcast { id: String },
    /// Chat with an assistant
    Chat {
        #[arg(long)]
        article: Option<String>,
    },
}

impl Cli {
    /// File values first, then flag overrides.
    fn resolve_config(&self) -> Result<PortalConfig> {
        let mut config = match &self.config {
            Some(path) => PortalConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PortalConfig::default(),
        };
        if let Some(source) = self.catalog {
            config.catalog.source = source;
        }
        if let Some(location) = &self.catalog_location {
            config.catalog.location = Some(location.clone());
        }
        if let Commands::Serve { bind: Some(bind) } = &self.command {
            config.server.bind = bind.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let config = cli.resolve_config()?;
    let catalog = nd_storage::load_catalog(&config.catalog).await?;

    match cli.command {
        Commands::Serve { .. } => {
            info!("🚀 Starting web API");
            nd_web::serve(AppState::new(catalog), &config.server.bind).await?;
        }
        Commands::Feed { category, query } => {
            let mut feed_query = FeedQuery::new().category(category.as_deref());
            if let Some(text) = query {
                feed_query = feed_query.text(text);
            }
            print!("{}", render::feed(&catalog.feed(&feed_query)));
        }
        Commands::Article { id } => {
            print!("{}", render::article(catalog.get(&id)?));
        }
        Commands::Insights { id } => {
            let article = catalog.get(&id)?;
            print!("{}", render::insights(&ArticleInsights::build(&catalog, article)));
        }
        Commands::Ask { message, article, mode } => {
            let article = article.as_deref().map(|id| catalog.get(id)).transpose()?;
            let responder = create_responder(&catalog, article, mode);
            let reply = responder.respond(&message);
            info!("💬 {} answered with rule '{}'", responder.name(), reply.rule);
            println!("{}", reply.text);
        }
        Commands::Quiz { id } => {
            interactive::quiz(catalog.get(&id)?, &config.widgets).await?;
        }
        Commands::Poll { id } => {
            interactive::poll(catalog.get(&id)?).await?;
        }
        Commands::GroupChat { id } => {
            interactive::group_chat(catalog.get(&id)?, &config.widgets).await?;
        }
        Commands::Podcast { id } => {
            interactive::podcast(catalog.get(&id)?, &config.widgets).await?;
        }
        Commands::Chat { article } => {
            let article = article.as_deref().map(|id| catalog.get(id)).transpose()?;
            interactive::chat(&catalog, article, &config.widgets).await?;
        }
    }

    Ok(())
}

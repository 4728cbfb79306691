mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "feedsent")]
#[command(about = "Classify the sentiment of text and RSS/Atom feeds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the supported sentiment models
    Models,
    /// Classify a single piece of text
    Classify {
        /// Model name (VADER, TextBlob, HappyTransformer)
        #[arg(long, default_value = "VADER")]
        model: String,

        /// Text to classify
        text: String,
    },
    /// Chart the sentiment of a feed's leading entries
    Feed {
        /// Model name (VADER, TextBlob, HappyTransformer)
        #[arg(long, default_value = "VADER")]
        model: String,

        /// Maximum number of entries to classify (defaults to `FEEDSENT_ARTICLE_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,

        /// Feed URL or local file path
        url: String,
    },
    /// Lowercase, drop stopwords, and lemmatize text
    Preprocess {
        /// Text to normalise
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = feedsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Models => commands::run_models(),
        Commands::Classify { model, text } => {
            commands::run_classify(&config, &model, &text).await?;
        }
        Commands::Feed { model, limit, url } => {
            commands::run_feed(&config, &model, &url, limit).await?;
        }
        Commands::Preprocess { text } => commands::run_preprocess(&text),
    }

    Ok(())
}

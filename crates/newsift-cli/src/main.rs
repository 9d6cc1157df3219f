use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use newsift_fetch::NewsClient;
use newsift_inference::{Embedder, LlmSummarizer, Summarizer, TeiEmbedder};
use newsift_pipeline::{NewsPipeline, PipelineConfig};

#[derive(Debug, Parser)]
#[command(name = "newsift")]
#[command(about = "Company news relevance pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, deduplicate, rank, and expand news for one company.
    Analyze {
        /// Company name as registered in the companies file.
        company: String,
        /// Window start (YYYY-MM-DD). Defaults to the configured window
        /// before the end date.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Window end (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List the companies available for analysis.
    Companies,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = newsift_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let registry = newsift_core::CompanyRegistry::load(&config.companies_path)?;

    let news = NewsClient::new(
        &config.provider_url,
        &config.provider_token,
        config.request_timeout_secs,
        config.max_retries,
        config.retry_backoff_base_ms,
    )?;
    let embedder: Arc<dyn Embedder> = Arc::new(TeiEmbedder::new(&config.tei_url));
    let summarizer: Option<Arc<dyn Summarizer>> = match &config.summarizer_url {
        Some(url) => Some(Arc::new(LlmSummarizer::new(
            url,
            config.summarizer_timeout_secs,
        )?)),
        None => None,
    };

    let pipeline = NewsPipeline::new(
        news,
        embedder,
        summarizer,
        registry,
        config.decay_rate,
        PipelineConfig::from_app_config(&config),
    );

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { company, from, to } => {
            let to = to.unwrap_or_else(|| Utc::now().date_naive());
            let from = from.unwrap_or(to - chrono::Duration::days(config.fetch_window_days));
            let articles = pipeline.analyze_window(&company, from, to).await?;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
        Commands::Companies => {
            for name in pipeline.company_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

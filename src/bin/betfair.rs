use anyhow::Result;
use betfair_rest::dto::{
    BookOptions, ListMarketCatalogueRequest, MarketFilter, MarketFilterRequest, MarketProjection,
    MarketSort, PriceData, PriceProjection,
};
use betfair_rest::{AccountsManager, BettingManager, CertLogin, Config};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "betfair")]
#[command(about = "Query the Betfair Exchange REST API", long_about = None)]
struct Cli {
    /// Path to the config file. BETFAIR_* environment variables override it.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Response locale, e.g. "it"
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List event types (sports) with market counts
    EventTypes {
        /// Free text filter
        #[arg(short, long)]
        text: Option<String>,
    },
    /// List competitions for event types
    Competitions {
        /// Event type IDs, e.g. 1 for soccer
        #[arg(short, long)]
        event_type: Vec<String>,
    },
    /// List events
    Events {
        #[arg(short, long)]
        event_type: Vec<String>,
        #[arg(short = 'C', long)]
        competition: Vec<String>,
        /// Only events that are in play
        #[arg(long)]
        in_play: bool,
    },
    /// List market catalogue entries
    Catalogue {
        #[arg(short, long)]
        event_type: Vec<String>,
        #[arg(short = 'E', long)]
        event: Vec<String>,
        /// Market type codes, e.g. MATCH_ODDS
        #[arg(short, long)]
        market_type: Vec<String>,
        /// Maximum number of markets (1-1000)
        #[arg(short = 'n', long, default_value = "10")]
        max_results: u32,
    },
    /// Show best available prices for markets
    Book {
        #[arg(required = true)]
        market_ids: Vec<String>,
    },
    /// Show account funds
    Funds,
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let login = CertLogin::new();

    let with_locale = |filter: MarketFilter| {
        let request = MarketFilterRequest::new(filter);
        match &cli.locale {
            Some(locale) => request.with_locale(locale.clone()),
            None => request,
        }
    };

    let response = match cli.command {
        Commands::EventTypes { text } => {
            let filter = MarketFilter {
                text_query: text,
                ..Default::default()
            };
            let betting = BettingManager::connect(&config, &login).await?;
            betting.list_event_types(with_locale(filter)).await?
        }
        Commands::Competitions { event_type } => {
            let filter = MarketFilter {
                event_type_ids: non_empty(event_type),
                ..Default::default()
            };
            let betting = BettingManager::connect(&config, &login).await?;
            betting.list_competitions(with_locale(filter)).await?
        }
        Commands::Events {
            event_type,
            competition,
            in_play,
        } => {
            let filter = MarketFilter {
                event_type_ids: non_empty(event_type),
                competition_ids: non_empty(competition),
                in_play_only: in_play.then_some(true),
                ..Default::default()
            };
            let betting = BettingManager::connect(&config, &login).await?;
            betting.list_events(with_locale(filter)).await?
        }
        Commands::Catalogue {
            event_type,
            event,
            market_type,
            max_results,
        } => {
            let filter = MarketFilter {
                event_type_ids: non_empty(event_type),
                event_ids: non_empty(event),
                market_type_codes: non_empty(market_type),
                ..Default::default()
            };
            let mut request = ListMarketCatalogueRequest::new(filter, max_results)
                .with_projection(vec![
                    MarketProjection::Event,
                    MarketProjection::MarketStartTime,
                    MarketProjection::RunnerDescription,
                ])
                .with_sort(MarketSort::FirstToStart);
            request.locale = cli.locale.clone();
            let betting = BettingManager::connect(&config, &login).await?;
            betting.list_market_catalogue(&request).await?
        }
        Commands::Book { market_ids } => {
            let options = BookOptions {
                price_projection: Some(PriceProjection::new(vec![PriceData::ExBestOffers])),
                locale: cli.locale.clone(),
                ..Default::default()
            };
            let betting = BettingManager::connect(&config, &login).await?;
            betting.list_market_book(market_ids, Some(options)).await?
        }
        Commands::Funds => {
            let accounts = AccountsManager::connect(&config, &login).await?;
            accounts.get_account_funds(None).await?
        }
    };

    print_json(&response)
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use culture_map::catalog::{PlaceCatalog, PlaceFilter};
use culture_map::config::Config;
use culture_map::domain::category::{Category, CategoryFilter};
use culture_map::error::Result;
use culture_map::geolocate::{locate_event, Locator, StaticLocator};
use culture_map::i18n::{Locale, UiText};
use culture_map::logging;
use culture_map::map::markers;
use culture_map::server;
use culture_map::state::AppState;

#[derive(Parser)]
#[command(name = "culture_map")]
#[command(about = "Map catalog of cultural venues in Nizhny Novgorod")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues, optionally narrowed by category and search text
    List {
        /// Category key: all, museum, theater, library, gallery, house-of-culture, art-school
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,
        /// Locale for names and labels: ru, en, zh
        #[arg(long, default_value = "ru")]
        locale: String,
    },
    /// Show the category buttons the way the sidebar presents them
    Categories {
        /// Locale for the labels: ru, en, zh
        #[arg(long, default_value = "ru")]
        locale: String,
    },
    /// Print filtered venues as marker JSON, ready for a map client
    Export {
        /// Category key: all, museum, theater, library, gallery, house-of-culture, art-school
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,
        /// Locale for names and labels: ru, en, zh
        #[arg(long, default_value = "ru")]
        locale: String,
        /// Write the JSON to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Resolve the configured position and show where the map would jump
    Locate,
    /// Serve the JSON API and the map page
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

fn parse_filter(category: &str, search: &str, locale: &str) -> Result<PlaceFilter> {
    Ok(PlaceFilter {
        category: CategoryFilter::parse(category)?,
        search: search.to_string(),
        locale: Locale::parse(locale)?,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    let config = Config::load_or_default()?;
    let catalog = PlaceCatalog::builtin();

    match cli.command {
        Commands::List {
            category,
            search,
            locale,
        } => {
            let filter = parse_filter(&category, &search, &locale)?;
            let visible = catalog.filter(&filter);

            info!("Listing {} of {} places", visible.len(), catalog.len());
            println!("📍 {} of {} places", visible.len(), catalog.len());
            for place in visible {
                println!(
                    "   #{} {} [{}]",
                    place.id,
                    place.name(filter.locale),
                    place.category.label(filter.locale)
                );
                println!("      {}", place.address);
            }
        }
        Commands::Categories { locale } => {
            let locale = Locale::parse(&locale)?;

            println!("🗂️  {}", UiText::Categories.label(locale));
            println!(
                "   {:<18} {} ({})",
                CategoryFilter::ALL_KEY,
                CategoryFilter::All.label(locale),
                catalog.len()
            );
            for &category in Category::ALL {
                let filter = PlaceFilter::new(CategoryFilter::Only(category), "", locale);
                println!(
                    "   {:<18} {} ({})",
                    category.key(),
                    category.label(locale),
                    catalog.filter(&filter).len()
                );
            }
        }
        Commands::Export {
            category,
            search,
            locale,
            out,
        } => {
            let filter = parse_filter(&category, &search, &locale)?;
            let pins = markers(catalog.filter(&filter), filter.locale);
            let json = serde_json::to_string_pretty(&pins)?;

            info!("Exporting {} markers", pins.len());
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("💾 Wrote {} markers to {}", pins.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Locate => {
            let locator: Box<dyn Locator> = match config.locator.position() {
                Some(position) => Box::new(StaticLocator::new(position)),
                None => Box::new(StaticLocator::unavailable()),
            };

            match locate_event(locator.as_ref()).await {
                Some(event) => {
                    let state = AppState::default().reduce(event);
                    println!(
                        "📍 {}: {}, {} (zoom {})",
                        UiText::FindMe.label(config.ui.default_locale),
                        state.view.center.lat,
                        state.view.center.lng,
                        state.view.zoom
                    );
                }
                None => {
                    println!("⚠️  No position available. Set [locator] latitude and longitude in config.toml");
                }
            }
        }
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            println!("🌍 Serving {} places", catalog.len());
            server::start_server(Arc::new(catalog), &config).await?;
        }
    }
    Ok(())
}

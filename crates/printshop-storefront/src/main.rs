//! Print shop quote CLI
//!
//! Prices an order from `field=value` pairs named like the storefront's
//! order form:
//!
//! ```text
//! printshop-quote pages=100 copies=50 colorMode=bw binding=spiral \
//!     paper=matte shipping=rush extras=laminate
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use printshop_storefront::{
    engine_from_config, FormData, Storefront, StorefrontConfig, STOREFRONT_VERSION,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "printshop-quote")]
#[command(about = "Price a print order the way the storefront does", long_about = None)]
struct Args {
    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,

    /// JSON rate table; overrides PRINTSHOP_RATES_FILE
    #[arg(long, value_name = "FILE")]
    rates: Option<PathBuf>,

    /// Form fields as name=value (pages, copies, colorMode, binding, paper,
    /// shipping, extras; extras may repeat)
    #[arg(value_name = "FIELD=VALUE")]
    fields: Vec<String>,
}

impl Args {
    fn form(&self) -> FormData {
        self.fields
            .iter()
            .map(|raw| FormData::parse_pair(raw))
            .collect()
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    info!("Print shop quote v{}", STOREFRONT_VERSION);

    let mut config = StorefrontConfig::load()?;
    if let Some(path) = &args.rates {
        config.rates_file = Some(path.clone());
    }

    let engine = engine_from_config(&config)
        .with_context(|| format!("failed to load rates from {:?}", config.rates_file))?;

    let storefront = Storefront::from_config(engine, args.form(), &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(storefront.breakdown())?);
    } else {
        println!("{}", storefront.summary());
    }

    Ok(())
}

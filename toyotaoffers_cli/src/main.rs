mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use toyotaoffers_lib::{run_scrape_with_progress, LeasePolicy, OfferClient, ScrapeConfig};

#[derive(Parser)]
#[command(name = "toyotaoffers")]
#[command(about = "Scrape a regional Toyota site's lease offers into a CSV")]
struct Cli {
    /// Dealer site base URL
    #[arg(long, default_value = "https://www.buyatoyota.com")]
    base_url: String,

    /// Regional site slug (e.g. greaterny)
    #[arg(long, default_value = "greaterny")]
    region: String,

    /// Listing page size query parameter
    #[arg(long, default_value = "27")]
    limit: u32,

    /// Output CSV path
    #[arg(long, default_value = "toyota_offers.csv")]
    out: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Cookie header sent with every request (default matches the site's
    /// privacy-modal cookie; pass an empty string to send none)
    #[arg(long)]
    cookie: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Model year recorded for scraped offers
    #[arg(long, default_value = "2024")]
    year: i32,

    /// Console format for the parsed-offer dump: table or json
    #[arg(long, default_value = "table")]
    output: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toyotaoffers_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = ScrapeConfig {
        base_url: cli.base_url,
        region: cli.region,
        limit: cli.limit,
        timeout: Duration::from_secs(cli.timeout_secs),
        accept_invalid_certs: cli.insecure,
        ..ScrapeConfig::default()
    };
    if let Some(cookie) = cli.cookie {
        config.cookie = cookie;
    }

    let policy = LeasePolicy {
        year: cli.year,
        ..LeasePolicy::default()
    };

    let client = OfferClient::new(&config)?;

    // Hidden until the listing fetch tells us how many detail pages exist.
    let bar = ProgressBar::hidden();
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}")
            .unwrap(),
    );
    bar.set_message("fetching offer details...");

    let outcome = run_scrape_with_progress(&client, &config, &policy, |done, total| {
        if bar.is_hidden() {
            bar.set_length(total);
            bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        bar.set_position(done);
    })
    .await?;
    bar.finish_and_clear();

    if outcome.offers.is_empty() {
        if outcome.links_found == 0 {
            eprintln!("No offer links found.");
        } else {
            eprintln!(
                "All {} discovered offers were skipped as unusable.",
                outcome.links_found
            );
        }
        return Ok(());
    }

    match cli.output.as_str() {
        "json" => output::print_json(&outcome.offers),
        _ => output::print_offers_table(&outcome.offers),
    }

    output::export_csv(&outcome.unique, &cli.out)?;
    eprintln!("Data exported to {}", cli.out.display());

    Ok(())
}

//! Scraper for a dealer site's regional lease-offer pages.
//!
//! A linear pipeline: fetch the offer listing, discover offer-detail
//! links, fetch each detail page sequentially, lift four text fragments
//! out of the markup, pattern-match typed fields from them, derive the
//! lease financials, then dedupe by vehicle identity. No retries, no
//! pagination, no concurrency.

pub mod client;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod lease;
pub mod listing;
pub mod parse;
pub mod pipeline;
pub mod types;

pub use client::OfferClient;
pub use config::{LeasePolicy, ScrapeConfig};
pub use error::ScrapeError;
pub use pipeline::{run_scrape, run_scrape_with_progress, ScrapeOutcome};
pub use types::{OfferRecord, RawOfferText, NOT_FOUND};

//! End-to-end scrape orchestration.
//!
//! Strictly sequential: listing page first, then each offer-detail page
//! one at a time in listing order. A failure on a single offer (transport
//! or unusable financial data) skips that offer and continues; only the
//! listing fetch is fatal.

use crate::client::OfferClient;
use crate::config::{LeasePolicy, ScrapeConfig};
use crate::dedupe::dedupe_offers;
use crate::error::ScrapeError;
use crate::extract::Selectors;
use crate::lease;
use crate::listing::extract_offer_links;
use crate::parse::FieldRules;
use crate::types::{OfferRecord, RawOfferText};

/// Everything a run produces: how many offer links the listing held, all
/// parsed offers in listing order, plus the identity-deduplicated subset
/// for export. `links_found` lets a caller tell "no offers listed" apart
/// from "every offer skipped".
pub struct ScrapeOutcome {
    pub links_found: usize,
    pub offers: Vec<OfferRecord>,
    pub unique: Vec<OfferRecord>,
}

/// Runs the whole pipeline against one listing URL.
///
/// An empty link list is a clean terminal state, not an error: the
/// outcome comes back empty and no detail pages are fetched.
pub async fn run_scrape(
    client: &OfferClient,
    config: &ScrapeConfig,
    policy: &LeasePolicy,
) -> Result<ScrapeOutcome, ScrapeError> {
    run_scrape_with_progress(client, config, policy, |_, _| {}).await
}

/// Same pipeline, reporting `(done, total)` after each detail page is
/// handled so a caller can drive a progress display.
pub async fn run_scrape_with_progress(
    client: &OfferClient,
    config: &ScrapeConfig,
    policy: &LeasePolicy,
    mut progress: impl FnMut(u64, u64),
) -> Result<ScrapeOutcome, ScrapeError> {
    let selectors = Selectors::default_rules()?;
    let rules = FieldRules::default_rules()?;

    let listing_url = config.listing_url();
    tracing::info!(%listing_url, "fetching offer listing");
    let listing_html = client.fetch_page(&listing_url).await?;

    let links = extract_offer_links(&listing_html, &config.offer_link_marker());
    if links.is_empty() {
        tracing::info!("no offer links found");
        return Ok(ScrapeOutcome {
            links_found: 0,
            offers: Vec::new(),
            unique: Vec::new(),
        });
    }
    tracing::info!(count = links.len(), "discovered offer links");

    let mut offers = Vec::with_capacity(links.len());
    for (index, link) in links.iter().enumerate() {
        let url = client.absolute_url(link);
        tracing::info!("fetching offer {}/{}: {}", index + 1, links.len(), url);

        match client.fetch_page(&url).await {
            Ok(html) => {
                let fields = selectors.extract_fields(&html);
                match build_record(&rules, policy, &fields) {
                    Ok(record) => offers.push(record),
                    Err(reason) => tracing::warn!("skipping offer {}: {}", url, reason),
                }
            }
            Err(e) => tracing::warn!("skipping offer {}: {}", url, e),
        }
        progress((index + 1) as u64, links.len() as u64);
    }

    let unique = dedupe_offers(&offers);
    tracing::info!(
        parsed = offers.len(),
        unique = unique.len(),
        "scrape complete"
    );
    Ok(ScrapeOutcome {
        links_found: links.len(),
        offers,
        unique,
    })
}

/// Parses one offer's fragments and derives its financials.
///
/// A zero denominator in any derivation marks the offer malformed; the
/// reason is returned so the caller can log and skip it.
fn build_record(
    rules: &FieldRules,
    policy: &LeasePolicy,
    fields: &RawOfferText,
) -> Result<OfferRecord, String> {
    let model = rules.model(&fields.title);
    let trim = rules.trim_level(&fields.terms);
    let msrp = rules.msrp(&fields.disclaimer);
    let monthly_payment = rules.monthly_payment(&fields.lease_summary);
    let term = rules.term_months(&fields.lease_summary);
    let due_at_signing = rules.due_at_signing(&fields.lease_summary);
    let residual_value = rules.residual_value(&fields.disclaimer);
    let capitalized_cost = rules.capitalized_cost(&fields.disclaimer);
    let end_date = rules.end_date(&fields.disclaimer);

    let monthly_payment_zero = lease::monthly_payment_zero(monthly_payment, due_at_signing, term)
        .ok_or("zero lease term")?;
    let residual_percentage =
        lease::residual_percentage(residual_value, msrp).ok_or("zero MSRP")?;
    let money_factor = lease::money_factor(monthly_payment, capitalized_cost, residual_value, term)
        .ok_or("zero money-factor denominator")?;
    let implied_apr = lease::implied_apr(money_factor);

    Ok(OfferRecord {
        year: policy.year,
        make: policy.make.clone(),
        model,
        trim,
        msrp,
        monthly_payment,
        monthly_payment_zero,
        term,
        due_at_signing,
        annual_miles: policy.annual_miles,
        acquisition_fee: policy.acquisition_fee,
        residual_value,
        residual_percentage,
        capitalized_cost,
        money_factor,
        implied_apr,
        mileage_overage_rate: policy.mileage_overage_rate,
        disposition_fee: policy.disposition_fee,
        end_date,
    })
}

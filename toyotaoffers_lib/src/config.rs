//! Scrape configuration and lease business policy.
//!
//! The legacy scraper hardcoded the dealer region, page size, model year,
//! and the fee schedule. Both structs here exist so a policy change is a
//! config edit, not a code edit.

use std::time::Duration;

/// Where and how to fetch the offer listing.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Dealer site root, no trailing slash. Defaults to the production site.
    pub base_url: String,
    /// Regional site slug, e.g. `greaterny`.
    pub region: String,
    /// Listing filter query value.
    pub filters: String,
    /// Listing page size query parameter.
    pub limit: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Cookie header sent with every request. Empty disables the header.
    pub cookie: String,
    /// Skip TLS certificate verification. The legacy scraper always did;
    /// here it is opt-in and off by default.
    pub accept_invalid_certs: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.buyatoyota.com".to_string(),
            region: "greaterny".to_string(),
            filters: "lease".to_string(),
            limit: 27,
            timeout: Duration::from_secs(30),
            cookie: "TOYOTANATIONAL_ENSIGHTEN_PRIVACY_MODAL_VIEWED=1".to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl ScrapeConfig {
    /// Full URL of the filtered offer listing page.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/{}/offers/?filters={}&limit={}",
            self.base_url.trim_end_matches('/'),
            self.region,
            self.filters,
            self.limit
        )
    }

    /// Substring that identifies offer-detail hrefs on the listing page.
    pub fn offer_link_marker(&self) -> String {
        format!("/{}/offer-detail/?offerid=", self.region)
    }
}

/// Fixed lease terms the site does not publish per offer.
#[derive(Debug, Clone)]
pub struct LeasePolicy {
    /// Model year recorded on every scraped offer.
    pub year: i32,
    pub make: String,
    pub annual_miles: i64,
    pub acquisition_fee: i64,
    /// Dollars per mile over the annual allowance.
    pub mileage_overage_rate: f64,
    pub disposition_fee: i64,
}

impl Default for LeasePolicy {
    fn default() -> Self {
        Self {
            year: 2024,
            make: "Toyota".to_string(),
            annual_miles: 10_000,
            acquisition_fee: 650,
            mileage_overage_rate: 0.15,
            disposition_fee: 350,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_includes_region_and_filters() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.listing_url(),
            "https://www.buyatoyota.com/greaterny/offers/?filters=lease&limit=27"
        );
    }

    #[test]
    fn listing_url_trims_trailing_slash() {
        let config = ScrapeConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ScrapeConfig::default()
        };
        assert!(config
            .listing_url()
            .starts_with("http://localhost:8080/greaterny/"));
    }

    #[test]
    fn offer_link_marker_uses_region() {
        let config = ScrapeConfig {
            region: "socal".to_string(),
            ..ScrapeConfig::default()
        };
        assert_eq!(config.offer_link_marker(), "/socal/offer-detail/?offerid=");
    }
}

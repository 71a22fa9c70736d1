//! Record types produced by the scrape pipeline.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Sentinel for a selector or pattern that matched nothing.
pub const NOT_FOUND: &str = "Not found";

/// The four text fragments lifted from one offer-detail page, before any
/// pattern matching. Each field is either trimmed text or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOfferText {
    pub title: String,
    pub lease_summary: String,
    pub terms: String,
    pub disclaimer: String,
}

/// One fully parsed and computed lease offer.
///
/// Field order matches the CSV column order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferRecord {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub msrp: i64,
    pub monthly_payment: i64,
    /// Implied payment with nothing due at signing, rounded to cents.
    pub monthly_payment_zero: f64,
    /// Lease term in months.
    pub term: i64,
    pub due_at_signing: i64,
    pub annual_miles: i64,
    pub acquisition_fee: i64,
    pub residual_value: i64,
    /// Residual as a rounded percentage of MSRP.
    pub residual_percentage: i64,
    pub capitalized_cost: i64,
    /// Unrounded lease financing rate.
    pub money_factor: f64,
    /// Money factor times 2400, rounded to one decimal.
    pub implied_apr: f64,
    pub mileage_overage_rate: f64,
    pub disposition_fee: i64,
    #[serde(serialize_with = "serialize_end_date")]
    pub end_date: Option<NaiveDate>,
}

impl OfferRecord {
    /// Vehicle identity used for deduplication.
    pub fn key(&self) -> (i32, String, String, String) {
        (
            self.year,
            self.make.clone(),
            self.model.clone(),
            self.trim.clone(),
        )
    }

    /// Expiration date in the site's `MM-DD-YYYY` form, or the sentinel.
    pub fn end_date_display(&self) -> String {
        match self.end_date {
            Some(date) => date.format("%m-%d-%Y").to_string(),
            None => NOT_FOUND.to_string(),
        }
    }
}

fn serialize_end_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&date.format("%m-%d-%Y").to_string()),
        None => serializer.serialize_str(NOT_FOUND),
    }
}

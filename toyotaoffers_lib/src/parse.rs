//! Text-pattern parsing of typed fields from the extracted fragments.
//!
//! Every function is tolerant of a miss: strings fall back to the
//! [`NOT_FOUND`] sentinel, numbers to 0, dates to `None`. Matching is
//! case-insensitive and thousands-separator commas are stripped before
//! integer conversion.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ScrapeError;
use crate::types::NOT_FOUND;

/// Compiled pattern ruleset for the free-form fragment text.
///
/// Patterns are tied to the site's current copywriting; like the CSS
/// selectors, they are data so drift is fixed without touching the
/// parsing code.
pub struct FieldRules {
    model: Regex,
    trim: Regex,
    msrp: Regex,
    monthly_payment: Regex,
    term: Regex,
    due_at_signing: Regex,
    residual_value: Regex,
    capitalized_cost: Regex,
    end_date: Regex,
}

impl FieldRules {
    /// The ruleset matching the site's current copy.
    pub fn default_rules() -> Result<Self, ScrapeError> {
        Ok(Self {
            model: compile(r"(?i)(\d{4} [\w\s]+) Lease Offer")?,
            trim: compile(r"lease a new (\d{4} .*?) for")?,
            msrp: compile(r"(?i)total srp of \$([0-9,]+)")?,
            monthly_payment: compile(r"(?i)\$([0-9]+)/ mo")?,
            term: compile(r"(?i)([0-9]+)mos")?,
            due_at_signing: compile(r"(?i)\$([0-9,]+)due at signing")?,
            residual_value: compile(r"(?i)lease end purchase amount of \$([0-9,]+)")?,
            capitalized_cost: compile(r"(?i)net capitalized cost of \$([0-9,]+)")?,
            end_date: compile(r"(?i)expires (\d{2}-\d{2}-\d{4})")?,
        })
    }

    /// `"<year> <model>"` preceding "Lease Offer" in the title heading.
    pub fn model(&self, title: &str) -> String {
        capture_string(&self.model, title)
    }

    /// Trim description from the "lease a new ... for ..." sentence. The
    /// terms text is lowercased first, so the capture comes back lowercase.
    pub fn trim_level(&self, terms: &str) -> String {
        capture_string(&self.trim, &terms.to_lowercase())
    }

    pub fn msrp(&self, disclaimer: &str) -> i64 {
        capture_amount(&self.msrp, disclaimer)
    }

    pub fn monthly_payment(&self, lease_summary: &str) -> i64 {
        capture_amount(&self.monthly_payment, lease_summary)
    }

    pub fn term_months(&self, lease_summary: &str) -> i64 {
        capture_amount(&self.term, lease_summary)
    }

    pub fn due_at_signing(&self, lease_summary: &str) -> i64 {
        capture_amount(&self.due_at_signing, lease_summary)
    }

    pub fn residual_value(&self, disclaimer: &str) -> i64 {
        capture_amount(&self.residual_value, disclaimer)
    }

    pub fn capitalized_cost(&self, disclaimer: &str) -> i64 {
        capture_amount(&self.capitalized_cost, disclaimer)
    }

    /// Expiration date after "expires", `MM-DD-YYYY`. `None` when the
    /// phrase is absent or the digits are not a real date.
    pub fn end_date(&self, disclaimer: &str) -> Option<NaiveDate> {
        self.end_date
            .captures(disclaimer)
            .and_then(|caps| caps.get(1))
            .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%m-%d-%Y").ok())
    }
}

fn compile(pattern: &str) -> Result<Regex, ScrapeError> {
    Regex::new(pattern).map_err(|e| ScrapeError::Rules(format!("bad pattern {pattern:?}: {e}")))
}

fn capture_string(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn capture_amount(re: &Regex, text: &str) -> i64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

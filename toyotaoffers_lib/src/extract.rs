//! Structural extraction of the four text fragments from a detail page.

use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::types::{RawOfferText, NOT_FOUND};

/// Upstream selector for the offer title heading.
pub const DEFAULT_TITLE: &str = "h1.fs67XEFk";
/// Upstream selector for the payment/term/due-at-signing block.
pub const DEFAULT_LEASE_SUMMARY: &str = "div.I5KoZl70.offer-dt-details";
/// Upstream selector for the "lease a new ... for ..." sentence.
pub const DEFAULT_TERMS: &str = "div.container.M6ODr8_z > div.Tf18Bjvu";
/// Upstream selector for the fine-print block.
pub const DEFAULT_DISCLAIMER: &str = r#"div[class*="disclaimer-color-grey"]"#;

/// Compiled CSS selector ruleset for the four offer-detail fragments.
///
/// The upstream class names are minified and churn when the site is
/// redeployed, so they live here as data: markup drift is fixed by
/// passing new selector strings, not by editing extraction code.
pub struct Selectors {
    title: Selector,
    lease_summary: Selector,
    terms: Selector,
    disclaimer: Selector,
}

impl Selectors {
    pub fn from_rules(
        title: &str,
        lease_summary: &str,
        terms: &str,
        disclaimer: &str,
    ) -> Result<Self, ScrapeError> {
        Ok(Self {
            title: compile(title)?,
            lease_summary: compile(lease_summary)?,
            terms: compile(terms)?,
            disclaimer: compile(disclaimer)?,
        })
    }

    /// The ruleset matching the site's current markup.
    pub fn default_rules() -> Result<Self, ScrapeError> {
        Self::from_rules(
            DEFAULT_TITLE,
            DEFAULT_LEASE_SUMMARY,
            DEFAULT_TERMS,
            DEFAULT_DISCLAIMER,
        )
    }

    /// Four independent lookups; each yields the first match's trimmed
    /// text content, or the [`NOT_FOUND`] sentinel when nothing matches.
    pub fn extract_fields(&self, html: &str) -> RawOfferText {
        let document = Html::parse_document(html);
        RawOfferText {
            title: first_text(&document, &self.title),
            lease_summary: first_text(&document, &self.lease_summary),
            terms: first_text(&document, &self.terms),
            disclaimer: first_text(&document, &self.disclaimer),
        }
    }
}

fn compile(rule: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(rule).map_err(|e| ScrapeError::Rules(format!("bad selector {rule:?}: {e}")))
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

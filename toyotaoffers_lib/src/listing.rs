//! Listing-page parsing: offer-detail link discovery.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Collects hrefs of anchors containing `marker`, in document order,
/// deduplicated by exact string. An empty result is a valid terminal
/// state, not an error.
pub fn extract_offer_links(html: &str, marker: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    let mut seen = HashSet::new();
    for element in document.select(&anchors) {
        if let Some(href) = element.value().attr("href") {
            if href.contains(marker) && seen.insert(href.to_string()) {
                links.push(href.to_string());
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "/greaterny/offer-detail/?offerid=";

    #[test]
    fn no_matching_anchors_yields_empty() {
        let html = r#"<html><body>
            <a href="/greaterny/offers/">All offers</a>
            <p>No deals today.</p>
        </body></html>"#;
        assert!(extract_offer_links(html, MARKER).is_empty());
    }

    #[test]
    fn plain_text_yields_empty() {
        assert!(extract_offer_links("just some text", MARKER).is_empty());
    }

    #[test]
    fn duplicate_hrefs_collapse_to_first_seen() {
        let html = r#"<html><body>
            <a href="/greaterny/offer-detail/?offerid=1">Camry</a>
            <a href="/greaterny/offer-detail/?offerid=2">RAV4</a>
            <a href="/greaterny/offer-detail/?offerid=1">Camry again</a>
            <a href="/greaterny/offer-detail/?offerid=3">Corolla</a>
        </body></html>"#;
        assert_eq!(
            extract_offer_links(html, MARKER),
            vec![
                "/greaterny/offer-detail/?offerid=1",
                "/greaterny/offer-detail/?offerid=2",
                "/greaterny/offer-detail/?offerid=3",
            ]
        );
    }

    #[test]
    fn anchors_for_other_regions_are_ignored() {
        let html = r#"<html><body>
            <a href="/socal/offer-detail/?offerid=9">SoCal deal</a>
            <a href="/greaterny/offer-detail/?offerid=4">NY deal</a>
        </body></html>"#;
        assert_eq!(
            extract_offer_links(html, MARKER),
            vec!["/greaterny/offer-detail/?offerid=4"]
        );
    }

    #[test]
    fn absolute_hrefs_still_match_by_substring() {
        let html = r#"<a href="https://www.buyatoyota.com/greaterny/offer-detail/?offerid=7">x</a>"#;
        assert_eq!(
            extract_offer_links(html, MARKER),
            vec!["https://www.buyatoyota.com/greaterny/offer-detail/?offerid=7"]
        );
    }
}

//! Offer deduplication by vehicle identity.

use std::collections::HashSet;

use crate::types::OfferRecord;

/// Collapses records to unique (year, make, model, trim) combinations.
/// First occurrence wins; insertion order is preserved.
pub fn dedupe_offers(records: &[OfferRecord]) -> Vec<OfferRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        if seen.insert(record.key()) {
            unique.push(record.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, trim: &str) -> OfferRecord {
        OfferRecord {
            year: 2024,
            make: "Toyota".to_string(),
            model: model.to_string(),
            trim: trim.to_string(),
            msrp: 0,
            monthly_payment: 0,
            monthly_payment_zero: 0.0,
            term: 0,
            due_at_signing: 0,
            annual_miles: 10_000,
            acquisition_fee: 650,
            residual_value: 0,
            residual_percentage: 0,
            capitalized_cost: 0,
            money_factor: 0.0,
            implied_apr: 0.0,
            mileage_overage_rate: 0.15,
            disposition_fee: 350,
            end_date: None,
        }
    }

    #[test]
    fn duplicate_identity_collapses_to_first() {
        let records = vec![
            record("Camry", "LE"),
            record("Camry", "LE"),
            record("Camry", "XLE"),
        ];
        let unique = dedupe_offers(&records);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].trim, "LE");
        assert_eq!(unique[1].trim, "XLE");
    }

    #[test]
    fn distinct_models_all_survive_in_order() {
        let records = vec![
            record("RAV4", "XLE"),
            record("Camry", "LE"),
            record("Corolla", "SE"),
        ];
        let unique = dedupe_offers(&records);
        let models: Vec<&str> = unique.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["RAV4", "Camry", "Corolla"]);
    }

    #[test]
    fn duplicate_keeps_first_seen_financials() {
        let mut first = record("Camry", "LE");
        first.msrp = 29_795;
        let mut second = record("Camry", "LE");
        second.msrp = 31_000;
        let unique = dedupe_offers(&[first, second]);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].msrp, 29_795);
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(dedupe_offers(&[]).is_empty());
    }
}

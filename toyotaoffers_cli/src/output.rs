use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabled::{Table, Tabled};
use toyotaoffers_lib::OfferRecord;

#[derive(Tabled)]
struct OfferRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Trim")]
    trim: String,
    #[tabled(rename = "MSRP")]
    msrp: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Zero-Down")]
    monthly_zero: String,
    #[tabled(rename = "Term")]
    term: String,
    #[tabled(rename = "Due at Signing")]
    due_at_signing: String,
    #[tabled(rename = "Residual %")]
    residual_pct: i64,
    #[tabled(rename = "APR")]
    apr: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

fn build_offer_rows(offers: &[OfferRecord]) -> Vec<OfferRow> {
    offers
        .iter()
        .map(|o| OfferRow {
            model: o.model.clone(),
            trim: o.trim.clone(),
            msrp: format!("${}", o.msrp),
            monthly: format!("${}/mo", o.monthly_payment),
            monthly_zero: format!("${:.2}/mo", o.monthly_payment_zero),
            term: format!("{} mos", o.term),
            due_at_signing: format!("${}", o.due_at_signing),
            residual_pct: o.residual_percentage,
            apr: format!("{:.1}%", o.implied_apr),
            expires: o.end_date_display(),
        })
        .collect()
}

/// Human-readable dump of every parsed offer.
pub fn print_offers_table(offers: &[OfferRecord]) {
    println!("{}", Table::new(build_offer_rows(offers)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Serializes records as CSV: one header row of field names, then one
/// row per record, standard quoting.
pub fn write_csv<W: Write>(records: &[OfferRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the CSV file. Any IO failure is fatal and surfaced to the caller.
pub fn export_csv(records: &[OfferRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)
}

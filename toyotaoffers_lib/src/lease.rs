//! Lease-math derivations.
//!
//! Standard US lease identities. The formulas are the business side's
//! approximations and must not be "corrected". Zero denominators return
//! `None` and the caller decides what to do with the record.

/// Implied monthly payment with nothing due at signing, rounded to cents:
/// the drive-off cash is spread evenly across the term.
pub fn monthly_payment_zero(monthly_payment: i64, due_at_signing: i64, term: i64) -> Option<f64> {
    if term == 0 {
        return None;
    }
    let spread = (due_at_signing - monthly_payment) as f64 / term as f64;
    Some(round2(monthly_payment as f64 + spread))
}

/// Residual value as a rounded percentage of MSRP.
pub fn residual_percentage(residual_value: i64, msrp: i64) -> Option<i64> {
    if msrp == 0 {
        return None;
    }
    Some((residual_value as f64 / msrp as f64 * 100.0).round() as i64)
}

/// Lease financing rate backed out of the payment: monthly payment minus
/// the depreciation component, over cap cost plus residual. Unrounded.
pub fn money_factor(
    monthly_payment: i64,
    capitalized_cost: i64,
    residual_value: i64,
    term: i64,
) -> Option<f64> {
    if term == 0 || capitalized_cost + residual_value == 0 {
        return None;
    }
    let depreciation = (capitalized_cost - residual_value) as f64 / term as f64;
    Some((monthly_payment as f64 - depreciation) / (capitalized_cost + residual_value) as f64)
}

/// Money factor times 2400 approximates an APR; rounded to one decimal.
pub fn implied_apr(money_factor: f64) -> f64 {
    round1(money_factor * 2400.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_payment_zero_spreads_drive_off() {
        // 300 + (3000 - 300) / 36 = 375
        assert_eq!(monthly_payment_zero(300, 3_000, 36), Some(375.0));
    }

    #[test]
    fn monthly_payment_zero_rounds_to_cents() {
        // 299 + 2700 / 36 = 374; 299 + (2999 - 299) / 36 = 374.0
        assert_eq!(monthly_payment_zero(299, 2_999, 36), Some(374.0));
        // 250 + (2000 - 250) / 24 = 322.9166... -> 322.92
        assert_eq!(monthly_payment_zero(250, 2_000, 24), Some(322.92));
    }

    #[test]
    fn monthly_payment_zero_rejects_zero_term() {
        assert_eq!(monthly_payment_zero(300, 3_000, 0), None);
    }

    #[test]
    fn residual_percentage_rounds() {
        assert_eq!(residual_percentage(16_000, 32_000), Some(50));
        assert_eq!(residual_percentage(17_281, 29_795), Some(58));
    }

    #[test]
    fn residual_percentage_rejects_zero_msrp() {
        assert_eq!(residual_percentage(16_000, 0), None);
    }

    #[test]
    fn money_factor_matches_identity() {
        let mf = money_factor(299, 27_003, 17_281, 36).unwrap();
        let expected = (299.0 - (27_003.0 - 17_281.0) / 36.0) / (27_003.0 + 17_281.0);
        assert!((mf - expected).abs() < 1e-12);
    }

    #[test]
    fn money_factor_rejects_zero_denominators() {
        assert_eq!(money_factor(299, 27_003, 17_281, 0), None);
        assert_eq!(money_factor(299, 0, 0, 36), None);
    }

    #[test]
    fn implied_apr_is_mf_times_2400_one_decimal() {
        let mf = money_factor(299, 27_003, 17_281, 36).unwrap();
        assert_eq!(implied_apr(mf), 1.6);
        assert_eq!(implied_apr(0.00125), 3.0);
    }
}

use serde::Deserialize;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    /// How many units of `self` one US dollar buys.
    fn per_usd(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => config::USD_TO_EUR,
        }
    }
}

/// Converts an amount in minor units, rounding half away from zero.
pub fn convert_cents(cents: i64, from: Currency, to: Currency) -> i64 {
    if from == to {
        return cents;
    }
    let converted = cents as f64 / from.per_usd() * to.per_usd();
    converted.round() as i64
}

fn group_thousands(mut units: u64, separator: char) -> String {
    let mut groups = Vec::new();
    loop {
        if units < 1000 {
            groups.push(units.to_string());
            break;
        }
        groups.push(format!("{:03}", units % 1000));
        units /= 1000;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

/// Display string in the currency's local convention: `$1,234.56`, `1.234,56 €`.
pub fn format_price(cents: i64, currency: Currency) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let (units, fraction) = (abs / 100, abs % 100);
    match currency {
        Currency::Usd => format!("{}${}.{:02}", sign, group_thousands(units, ','), fraction),
        Currency::Eur => format!("{}{},{:02} €", sign, group_thousands(units, '.'), fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_fixed_rate() {
        assert_eq!(convert_cents(10_000, Currency::Usd, Currency::Eur), 9_200);
        assert_eq!(convert_cents(9_200, Currency::Eur, Currency::Usd), 10_000);
        assert_eq!(convert_cents(123, Currency::Usd, Currency::Usd), 123);
    }

    #[test]
    fn rounds_sub_cent_results_symmetrically() {
        // 0.92 of a cent
        assert_eq!(convert_cents(1, Currency::Usd, Currency::Eur), 1);
        assert_eq!(convert_cents(-1, Currency::Usd, Currency::Eur), -1);
    }

    #[test]
    fn formats_both_conventions() {
        assert_eq!(format_price(123_456, Currency::Usd), "$1,234.56");
        assert_eq!(format_price(123_456, Currency::Eur), "1.234,56 €");
        assert_eq!(format_price(5, Currency::Usd), "$0.05");
        assert_eq!(format_price(100_000_000, Currency::Usd), "$1,000,000.00");
        assert_eq!(format_price(-2_050, Currency::Eur), "-20,50 €");
    }
}

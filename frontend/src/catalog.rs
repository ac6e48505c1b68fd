use serde::Deserialize;

use crate::pricing::{convert_cents, format_price, Currency};

const CATALOG_JSON: &str = include_str!("../catalog.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
    Platinum,
}

impl Metal {
    pub fn label(self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
            Metal::Platinum => "Platinum",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub metal: Metal,
    pub weight_grams: f64,
    pub price_cents: i64,
    pub currency: Currency,
    pub image: String,
    pub alt: String,
}

impl Product {
    /// Price in USD and EUR, whichever the list price is in.
    pub fn display_prices(&self) -> (String, String) {
        (
            format_price(convert_cents(self.price_cents, self.currency, Currency::Usd), Currency::Usd),
            format_price(convert_cents(self.price_cents, self.currency, Currency::Eur), Currency::Eur),
        )
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Products bundled with the build. An unreadable catalog renders an empty gallery.
pub fn products() -> Vec<Product> {
    match parse_catalog(CATALOG_JSON) {
        Ok(products) => products,
        Err(err) => {
            log::error!("bundled catalog is invalid: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_catalog_parses_with_unique_ids() {
        let products = parse_catalog(CATALOG_JSON).expect("catalog should parse");
        assert!(!products.is_empty());
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert!(products.iter().all(|p| p.price_cents > 0 && !p.alt.is_empty()));
    }

    #[test]
    fn eur_listed_product_converts_to_usd() {
        let product = Product {
            id: "p".into(),
            name: "Platinum".into(),
            metal: Metal::Platinum,
            weight_grams: 31.1,
            price_cents: 92_000,
            currency: Currency::Eur,
            image: "p.webp".into(),
            alt: "p".into(),
        };
        assert_eq!(
            product.display_prices(),
            ("$1,000.00".to_string(), "920,00 €".to_string())
        );
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(parse_catalog("[{\"id\": 1}]").is_err());
    }
}

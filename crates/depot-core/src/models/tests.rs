#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{round2, Product, SaleTotals, SeedFile};

    fn create_test_product() -> Product {
        Product {
            id: 1,
            sku: "ABC".to_string(),
            name: "Widget".to_string(),
            category: "tools".to_string(),
            unit_price_ht: 10.0,
            vat_rate: 0.20,
            quantity: 5,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(36.0), 36.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(1.239), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_unit_price_ttc() {
        let product = create_test_product();
        assert_eq!(product.unit_price_ttc(), 12.0);
    }

    #[test]
    fn test_unit_price_ttc_rounds_to_cent() {
        let product = Product {
            unit_price_ht: 9.99,
            vat_rate: 0.055,
            ..create_test_product()
        };
        // 9.99 * 1.055 = 10.53945
        assert_eq!(product.unit_price_ttc(), 10.54);
    }

    #[test]
    fn test_sale_totals() {
        let totals = SaleTotals::compute(3, 10.0, 0.20);
        assert_eq!(totals.total_ht, 30.0);
        assert_eq!(totals.total_vat, 6.0);
        assert_eq!(totals.total_ttc, 36.0);
    }

    #[test]
    fn test_sale_totals_internally_consistent() {
        // Awkward rate chosen so each component needs its own rounding
        let totals = SaleTotals::compute(7, 1.99, 0.055);
        assert_eq!(totals.total_ttc, round2(totals.total_ht + totals.total_vat));
    }

    #[test]
    fn test_seed_file_parses() {
        let json = r#"{
            "products": [
                {"sku": "ABC", "name": "Widget", "category": "tools",
                 "unit_price_ht": 10.0, "quantity": 5, "vat_rate": 0.20}
            ]
        }"#;
        let seed: SeedFile = serde_json::from_str(json).expect("Failed to parse seed file");
        assert_eq!(seed.products.len(), 1);
        assert_eq!(seed.products[0].sku, "ABC");
        assert_eq!(seed.products[0].quantity, 5);
    }

    #[test]
    fn test_seed_file_rejects_missing_field() {
        // quantity is absent
        let json = r#"{
            "products": [
                {"sku": "ABC", "name": "Widget", "category": "tools",
                 "unit_price_ht": 10.0, "vat_rate": 0.20}
            ]
        }"#;
        assert!(serde_json::from_str::<SeedFile>(json).is_err());
    }
}

//! Tests for webhook payload mapping.

use serde_json::json;

use super::derive_from_webhook;

mod fallbacks {
    use super::*;

    #[test]
    fn email_total_and_shipping_city() {
        let purchase = derive_from_webhook(&json!({
            "customer_email": "a@b.com",
            "total": 50,
            "shipping_address": { "city": "Lagos" }
        }));

        assert_eq!(purchase.customer_name.as_deref(), Some("a@b.com"));
        assert_eq!(purchase.product_name, None);
        assert!((purchase.amount - 50.0).abs() < f64::EPSILON);
        assert_eq!(purchase.currency, "NGN");
        assert_eq!(purchase.location.as_deref(), Some("Lagos"));
    }

    #[test]
    fn nested_customer_name_wins_over_email() {
        let purchase = derive_from_webhook(&json!({
            "customer": { "name": "Ada" },
            "customer_email": "ada@example.com"
        }));

        assert_eq!(purchase.customer_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn flat_customer_name_is_used_before_email() {
        let purchase = derive_from_webhook(&json!({
            "customer_name": "Chidi",
            "customer_email": "chidi@example.com"
        }));

        assert_eq!(purchase.customer_name.as_deref(), Some("Chidi"));
    }

    #[test]
    fn empty_customer_name_falls_through() {
        let purchase = derive_from_webhook(&json!({
            "customer": { "name": "" },
            "customer_email": "x@y.z"
        }));

        assert_eq!(purchase.customer_name.as_deref(), Some("x@y.z"));
    }

    #[test]
    fn product_name_then_nested_product_then_description() {
        let direct = derive_from_webhook(&json!({
            "product_name": "Plot A",
            "product": { "name": "Plot B" },
            "description": "Plot C"
        }));
        let nested = derive_from_webhook(&json!({
            "product": { "name": "Plot B" },
            "description": "Plot C"
        }));
        let described = derive_from_webhook(&json!({ "description": "Plot C" }));

        assert_eq!(direct.product_name.as_deref(), Some("Plot A"));
        assert_eq!(nested.product_name.as_deref(), Some("Plot B"));
        assert_eq!(described.product_name.as_deref(), Some("Plot C"));
    }

    #[test]
    fn amount_wins_over_total() {
        let purchase = derive_from_webhook(&json!({ "amount": 75, "total": 80 }));

        assert!((purchase.amount - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_amount_falls_back_to_total() {
        let purchase = derive_from_webhook(&json!({ "amount": 0, "total": 50 }));

        assert!((purchase.amount - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_amount_and_zero_total_yield_zero() {
        let purchase = derive_from_webhook(&json!({ "amount": "0", "total": 0 }));

        assert!(purchase.amount.abs() < f64::EPSILON);
    }

    #[test]
    fn whitespace_product_name_is_kept() {
        let purchase = derive_from_webhook(&json!({
            "product_name": " ",
            "description": "Plot C"
        }));

        assert_eq!(purchase.product_name.as_deref(), Some(" "));
    }

    #[test]
    fn non_numeric_amount_falls_back_to_total() {
        let purchase = derive_from_webhook(&json!({ "amount": "n/a", "total": "80.5" }));

        assert!((purchase.amount - 80.5).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_currency_is_kept() {
        let purchase = derive_from_webhook(&json!({ "currency": "USD" }));

        assert_eq!(purchase.currency, "USD");
    }

    #[test]
    fn alternate_shipping_object_supplies_city() {
        let purchase = derive_from_webhook(&json!({ "shipping": { "city": "Ibadan" } }));

        assert_eq!(purchase.location.as_deref(), Some("Ibadan"));
    }
}

mod terminal_defaults {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let purchase = derive_from_webhook(&json!({}));

        assert_eq!(purchase.customer_name, None);
        assert_eq!(purchase.product_name, None);
        assert!(purchase.amount.abs() < f64::EPSILON);
        assert_eq!(purchase.currency, "NGN");
        assert_eq!(purchase.location.as_deref(), Some(""));
        assert_eq!(purchase.user_name(), "A customer");
    }

    #[test]
    fn non_object_payload_never_fails() {
        for payload in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            let purchase = derive_from_webhook(&payload);
            assert_eq!(purchase.currency, "NGN");
            assert_eq!(purchase.location(), "");
        }
    }

    #[test]
    fn wrongly_typed_fields_are_ignored() {
        let purchase = derive_from_webhook(&json!({
            "customer": "not an object",
            "customer_email": 17,
            "shipping_address": { "city": 5 },
            "currency": false
        }));

        assert_eq!(purchase.customer_name, None);
        assert_eq!(purchase.currency, "NGN");
        assert_eq!(purchase.location.as_deref(), Some(""));
    }
}

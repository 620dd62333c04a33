//! Integration tests for building orders queries through the public API.

use chrono::{Duration, NaiveDate};
use ecwid_api::query::{
    normalize_statuses, validate_fulfillment_statuses, validate_payment_statuses, QueryValue,
    StatusKind, STATUSES,
};
use ecwid_api::{FulfillmentStatus, OrdersQuery, PaymentStatus, ValidationError};

const SEPARATORS: [&str; 4] = [",", " ", " , ", ",\t\n"];

#[test]
fn test_every_day_of_a_leap_year_formats_as_iso_date() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for offset in 0..366 {
        let day = start + Duration::days(offset);
        let query = OrdersQuery::new().to_update_date(day);

        assert_eq!(
            query.get("to_update_date"),
            Some(&QueryValue::Text(day.format("%Y-%m-%d").to_string()))
        );
    }
}

#[test]
fn test_full_vocabularies_with_any_separator_and_case() {
    let payment: Vec<&str> = PaymentStatus::ALL.iter().map(PaymentStatus::as_str).collect();
    let fulfillment: Vec<&str> = FulfillmentStatus::ALL
        .iter()
        .map(FulfillmentStatus::as_str)
        .collect();

    for separator in SEPARATORS {
        let payment_input = payment.join(separator).to_lowercase();
        let fulfillment_input = fulfillment.join(separator);

        let query = OrdersQuery::new()
            .statuses(&payment_input, &fulfillment_input)
            .unwrap();

        let expected = [payment.clone(), fulfillment.clone()].concat().join(",");
        assert_eq!(query.get(STATUSES), Some(&QueryValue::Text(expected)));
    }
}

#[test]
fn test_legacy_synonyms_are_accepted_and_sent_as_typed() {
    let query = OrdersQuery::new()
        .statuses("accepted QUEUED", "new")
        .unwrap();

    assert_eq!(
        query.to_query_pairs()[STATUSES],
        "ACCEPTED,QUEUED,NEW"
    );
}

#[test]
fn test_one_bad_token_rejects_whole_input() {
    for (payment, fulfillment, bad, kind) in [
        ("PAID, SHIPPED", "", "SHIPPED", StatusKind::Payment),
        ("", "DELIVERED PAID", "PAID", StatusKind::Fulfillment),
        ("paid refunded unpaid", "", "UNPAID", StatusKind::Payment),
    ] {
        let original = OrdersQuery::new().limit(10);
        let result = original.clone().statuses(payment, fulfillment);

        assert_eq!(
            result,
            Err(ValidationError::InvalidStatus {
                kind,
                token: bad.to_string(),
            })
        );
        assert!(original.get(STATUSES).is_none());
    }
}

#[test]
fn test_duplicates_are_preserved() {
    assert_eq!(
        validate_payment_statuses("PAID paid PAID").unwrap(),
        vec!["PAID", "PAID", "PAID"]
    );
    assert_eq!(
        validate_fulfillment_statuses("SHIPPED,shipped").unwrap(),
        vec!["SHIPPED", "SHIPPED"]
    );
}

#[test]
fn test_normalize_of_blank_input_is_empty() {
    for input in ["", "   ", ",,,", " \t,\n "] {
        assert!(normalize_statuses(input).is_empty(), "{input:?}");
    }
}

#[test]
fn test_queries_are_independent_values() {
    let base = OrdersQuery::new().add_payment_statuses("PAID").unwrap();
    let shipped = base.clone().add_fulfillment_statuses("SHIPPED").unwrap();
    let delivered = base.clone().add_fulfillment_statuses("DELIVERED").unwrap();

    assert_eq!(base.to_query_pairs()[STATUSES], "PAID");
    assert_eq!(shipped.to_query_pairs()[STATUSES], "PAID,SHIPPED");
    assert_eq!(delivered.to_query_pairs()[STATUSES], "PAID,DELIVERED");
}

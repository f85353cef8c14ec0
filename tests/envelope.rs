//! Integration tests for subject rendering, lookup and envelope encoding.

use std::collections::BTreeMap;

use event_subject::{Config, Envelope, Subject, build_envelope, find_by_module, find_by_subject};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Invoice {
    id: u64,
    total: f64,
    lines: Vec<String>,
}

#[test]
fn test_invoice_created_scenario() {
    let subject = Subject::new("MyApp", "Billing", "Invoice");
    let mut data = BTreeMap::new();
    data.insert("id", 42);

    let bytes = build_envelope(&subject, "created", &data, 7).unwrap();
    let envelope = Envelope::<Value>::from_slice(&bytes).unwrap();

    assert_eq!(envelope.subject(), "myapp.billing.invoice.created");
    assert_eq!(envelope.index(), 7);
    assert_eq!(envelope.data(), Some(&json!({"id": 42})));
}

#[test]
fn test_sparse_fields_absent_from_output() {
    let envelope: Envelope = Envelope::from_slice(b"{}").unwrap();
    let bytes = envelope.to_bytes().unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("index"));
    assert!(!object.contains_key("subject"));
    assert!(!object.contains_key("data"));
}

#[test]
fn test_typed_payload_roundtrip() {
    let config = Config::new("shop", "billing");
    let invoice = Invoice {
        id: 9,
        total: 12.5,
        lines: vec!["apple".into(), "pear".into()],
    };

    let bytes = build_envelope(&config.subject("invoice"), "paid", &invoice, 3).unwrap();
    let decoded = Envelope::<Invoice>::from_slice(&bytes).unwrap();

    assert_eq!(decoded.index(), 3);
    assert_eq!(decoded.subject(), "shop.billing.invoice.paid");
    assert_eq!(decoded.into_data(), Some(invoice));
}

#[test]
fn test_lookup_resolves_incoming_subject() {
    let known = vec![
        Subject::new("shop", "billing", "invoice"),
        Subject::new("shop", "billing", "refund"),
    ];

    let bytes = build_envelope(&known[1], "", (), 0).unwrap();
    let envelope: Envelope = Envelope::from_slice(&bytes).unwrap();

    let found = find_by_subject(&envelope.subject().to_uppercase(), &known);
    assert_eq!(found.as_ref(), Some(&known[1]));
    assert_eq!(find_by_module("REFUND", &known), found);
}

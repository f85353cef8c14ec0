//! Builds a few envelopes and "publishes" them to stdout.
//!
//! Run with `cargo run --example publish`.

use event_subject::{Config, Error, Publisher, Result, find_by_module, publish};
use serde::Serialize;

#[derive(Serialize)]
struct OrderPlaced {
    order_id: u64,
    items: Vec<&'static str>,
}

struct Stdout;

impl Publisher for Stdout {
    fn publish(&self, subject: &str, payload: &[u8]) -> Result<()> {
        let payload = std::str::from_utf8(payload).map_err(|e| Error::transport(e.to_string()))?;
        println!("{subject} <- {payload}");
        Ok(())
    }
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let config = Config::new("Shop", "Orders.EU");
    let known = [config.subject("Order"), config.subject("Shipment")];

    let order = OrderPlaced {
        order_id: 1001,
        items: vec!["book", "lamp"],
    };
    publish(&Stdout, &known[0], "placed", &order, 1)?;

    if let Some(shipment) = find_by_module("SHIPMENT", &known) {
        publish(&Stdout, &shipment, "dispatched", (), 0)?;
    }

    Ok(())
}

//! event-subject - Subject naming and envelopes for pub/sub messaging
//!
//! A small convenience layer over a message transport. It builds
//! hierarchical routing keys (`application.service.module[.verb]`) and wraps
//! payloads into a sparse JSON envelope ready to be handed to a broker client.
//!
//! ```rust
//! use event_subject::{Subject, build_envelope};
//!
//! let subject = Subject::new("MyApp", "Billing", "Invoice");
//! assert_eq!(subject.render(Some("created")), "myapp.billing.invoice.created");
//!
//! let bytes = build_envelope(&subject, "created", serde_json::json!({"id": 42}), 7)?;
//! assert_eq!(
//!     bytes,
//!     br#"{"index":7,"subject":"myapp.billing.invoice.created","data":{"id":42}}"#
//! );
//! # Ok::<(), event_subject::Error>(())
//! ```
//!
//! See `demos/publish.rs`.

mod config;
mod envelope;
mod error;
mod lookup;
mod publisher;
mod subject;

pub use config::Config;
pub use envelope::{Envelope, build_envelope};
pub use error::Error;
pub use lookup::{eq_fold, find_by_module, find_by_subject};
pub use publisher::{Publisher, publish};
pub use subject::Subject;

pub type Result<T = ()> = std::result::Result<T, Error>;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Result, Subject};

/// Outbound message wrapper: routing subject, correlation index and payload.
///
/// The wire form is sparse JSON. Default values are not transmitted:
/// - `index` is omitted when `0`,
/// - `subject` is omitted when empty,
/// - `data` is omitted when absent.
///
/// Missing fields decode back to those defaults, so older consumers can
/// read envelopes that leave them out.
///
/// The payload type defaults to [`serde_json::Value`], which lets consumers
/// decode any envelope without knowing what producers put in it. Producers
/// usually hand their own `Serialize` types (structs, maps) to
/// [`build_envelope`].
///
/// Encoding is plain `serde_json`: HTML-sensitive characters (`<`, `>`,
/// `&`) are written as-is rather than `\u003c`-style escapes. The JSON is
/// equivalent, but byte-level comparisons against encoders that escape them
/// won't hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default, skip_serializing_if = "is_zero")]
    index: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Create an envelope addressed to `subject` with the given verb.
    ///
    /// An empty verb addresses the three-segment subject.
    pub fn new(subject: &Subject, verb: &str, data: Option<T>, index: i64) -> Self {
        Self {
            index,
            subject: subject.render(Some(verb)),
            data,
        }
    }

    /// Correlation index; `0` means unset.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Rendered routing subject; empty means unset.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Payload, if one was set.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize into the JSON wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from its JSON wire form.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Wrap `data` into an envelope addressed to `subject` + `verb` and
/// serialize it.
///
/// An empty verb falls back to the three-segment subject. A payload that
/// serializes to `null` (`()` or `None`) is left out of the envelope.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) when the
/// payload can't be represented as JSON, e.g. a map with non-string keys.
/// Nothing is partially written.
pub fn build_envelope<T>(subject: &Subject, verb: &str, data: T, index: i64) -> Result<Vec<u8>>
where
    T: Serialize,
{
    let data = serde_json::to_value(data).inspect_err(|e| {
        tracing::warn!(subject = %subject, verb, error = %e, "Payload can't be serialized");
    })?;
    let envelope = Envelope::new(subject, verb, (!data.is_null()).then_some(data), index);
    tracing::trace!(subject = envelope.subject(), index, "Envelope built");
    envelope.to_bytes()
}

fn is_zero(index: &i64) -> bool {
    *index == 0
}

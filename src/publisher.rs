use serde::Serialize;

use crate::{Result, Subject, build_envelope};

/// Transport client that delivers serialized envelopes.
///
/// Implement this for the broker client in use. Connection handling,
/// retries and acknowledgments belong to the implementation; failures
/// should be reported as [`Error::Transport`](crate::Error::Transport).
pub trait Publisher {
    fn publish(&self, subject: &str, payload: &[u8]) -> Result<()>;
}

impl<P: Publisher + ?Sized> Publisher for &P {
    fn publish(&self, subject: &str, payload: &[u8]) -> Result<()> {
        (**self).publish(subject, payload)
    }
}

/// Build an envelope and hand it to `publisher` under its rendered subject.
///
/// Serialization errors are returned before the publisher is called.
/// Publisher errors are passed through unchanged.
pub fn publish<P, T>(
    publisher: &P,
    subject: &Subject,
    verb: &str,
    data: T,
    index: i64,
) -> Result<()>
where
    P: Publisher + ?Sized,
    T: Serialize,
{
    let payload = build_envelope(subject, verb, data, index)?;
    publisher.publish(&subject.render(Some(verb)), &payload)
}

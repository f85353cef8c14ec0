use serde::{Deserialize, Serialize};

/// Hierarchical routing key made of application, service and module.
///
/// Segments are normalized once, when the subject is created: each is
/// lowercased and every `.` is replaced with `-`, so the dots in a rendered
/// subject are always true segment delimiters. Empty segments are accepted
/// but won't route well; keeping them meaningful is up to the caller.
///
/// A subject renders as `application.service.module`, optionally followed by
/// a verb segment describing the action (e.g. `created`).
///
/// # Examples
///
/// ```rust
/// use event_subject::Subject;
///
/// let subject = Subject::new("MyApp", "Billing", "Invoice.Line");
/// assert_eq!(subject.module(), "invoice-line");
/// assert_eq!(subject.render(None), "myapp.billing.invoice-line");
/// assert_eq!(subject.render(Some("created")), "myapp.billing.invoice-line.created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SubjectParts")]
pub struct Subject {
    application: String,
    service: String,
    module: String,
}

impl Subject {
    /// Create a subject, normalizing every segment.
    pub fn new<A, S, M>(application: A, service: S, module: M) -> Self
    where
        A: AsRef<str>,
        S: AsRef<str>,
        M: AsRef<str>,
    {
        Self {
            application: normalize(application.as_ref()),
            service: normalize(service.as_ref()),
            module: normalize(module.as_ref()),
        }
    }

    /// First segment.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Second segment.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Third segment.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Render the subject as routing text.
    ///
    /// A `None` or empty verb yields the three-segment form. The verb is
    /// appended as given.
    pub fn render(&self, verb: Option<&str>) -> String {
        let mut text = format!(
            "{}.{}.{}",
            self.application.to_lowercase(),
            self.service.to_lowercase(),
            self.module.to_lowercase()
        );
        if let Some(verb) = verb.filter(|v| !v.is_empty()) {
            text.push('.');
            text.push_str(verb);
        }
        text
    }

    /// Shorthand for `render(Some(verb))`.
    #[inline]
    pub fn with_verb(&self, verb: &str) -> String {
        self.render(Some(verb))
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

// Decoded subjects pass through the constructor so they stay normalized.
#[derive(Deserialize)]
struct SubjectParts {
    application: String,
    service: String,
    module: String,
}

impl From<SubjectParts> for Subject {
    fn from(parts: SubjectParts) -> Self {
        Subject::new(parts.application, parts.service, parts.module)
    }
}

fn normalize(segment: &str) -> String {
    segment.to_lowercase().replace('.', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_segments() {
        let subject = Subject::new("My.App", "BILLING", "In.Voi.Ce");
        assert_eq!(subject.application(), "my-app");
        assert_eq!(subject.service(), "billing");
        assert_eq!(subject.module(), "in-voi-ce");
    }

    #[test]
    fn test_new_accepts_empty_segments() {
        let subject = Subject::new("", "", "");
        assert_eq!(subject.application(), "");
        assert_eq!(subject.render(None), "..");
    }

    #[test]
    fn test_new_lowercases_unicode() {
        let subject = Subject::new("ÜBER", "Σύστημα", "Straße");
        assert_eq!(subject.application(), "über");
        assert_eq!(subject.service(), "σύστημα");
        assert_eq!(subject.module(), "straße");
    }

    #[test]
    fn test_render_without_verb() {
        let subject = Subject::new("app", "svc", "mod");
        assert_eq!(subject.render(None), "app.svc.mod");
        assert_eq!(subject.render(Some("")), "app.svc.mod");
        assert_eq!(subject.to_string(), "app.svc.mod");
    }

    #[test]
    fn test_render_with_verb() {
        let subject = Subject::new("app", "svc", "mod");
        assert_eq!(subject.render(Some("created")), "app.svc.mod.created");
        assert_eq!(
            subject.with_verb("deleted"),
            format!("{}.deleted", subject.render(None))
        );
    }

    #[test]
    fn test_render_keeps_verb_as_given() {
        let subject = Subject::new("app", "svc", "mod");
        assert_eq!(subject.render(Some("Created")), "app.svc.mod.Created");
    }

    #[test]
    fn test_render_is_repeatable() {
        let subject = Subject::new("A", "B", "C");
        assert_eq!(subject.render(Some("x")), subject.render(Some("x")));
    }

    #[test]
    fn test_serde_roundtrip_normalizes() {
        let subject: Subject = serde_json::from_str(
            r#"{"application":"My.App","service":"Svc","module":"MOD"}"#,
        )
        .unwrap();
        assert_eq!(subject, Subject::new("my-app", "svc", "mod"));

        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"application": "my-app", "service": "svc", "module": "mod"})
        );
    }
}

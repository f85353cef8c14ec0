use crate::Subject;

/// Fixed subject prefixes for a publishing component.
///
/// Most components publish under a single application and service and only
/// vary the module. `Config` keeps those two segments so subjects can be
/// produced from a module name alone. Use the builder methods to customize,
/// or [`Default`] for empty prefixes.
///
/// # Examples
///
/// ```rust
/// use event_subject::Config;
///
/// let config = Config::default()
///     .with_application("MyApp")
///     .with_service("Billing");
///
/// let subject = config.subject("Invoice");
/// assert_eq!(subject.render(Some("created")), "myapp.billing.invoice.created");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// First segment of every produced subject.
    /// Default: empty
    pub application: String,

    /// Second segment of every produced subject.
    /// Default: empty
    pub service: String,
}

impl Config {
    /// Create a config with the given application and service segments.
    pub fn new<A, S>(application: A, service: S) -> Self
    where
        A: Into<String>,
        S: Into<String>,
    {
        Self {
            application: application.into(),
            service: service.into(),
        }
    }

    /// Set the application segment.
    pub fn with_application<A: Into<String>>(mut self, application: A) -> Self {
        self.application = application.into();
        self
    }

    /// Set the service segment.
    pub fn with_service<S: Into<String>>(mut self, service: S) -> Self {
        self.service = service.into();
        self
    }

    /// Build a normalized subject for `module` under the configured prefixes.
    pub fn subject<M: AsRef<str>>(&self, module: M) -> Subject {
        Subject::new(&self.application, &self.service, module)
    }
}

use serde::Serialize;
use std::fmt;

/// Which part of the dashboard a [`Diagnostic`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// The sentiment model could not be loaded.
    Model,
    /// News could not be fetched or classified.
    News,
    /// ESG scores could not be fetched.
    Esg,
    /// The price series could not be fetched.
    Prices,
    /// The company display name could not be resolved.
    Company,
}

impl DiagnosticKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::News => "news",
            Self::Esg => "esg",
            Self::Prices => "prices",
            Self::Company => "company",
        }
    }
}

/// A user-visible warning emitted when a provider failure was degraded to an
/// empty or absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The affected part of the dashboard.
    pub kind: DiagnosticKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic from any displayable error.
    pub fn new(kind: DiagnosticKind, message: impl fmt::Display) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

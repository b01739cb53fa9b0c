use serde::Serialize;

/// Environmental, social and governance sub-scores for a company, each a fraction in `[0, 1]`.
///
/// A sub-score the provider did not report is `None`; it is never reported as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EsgScore {
    /// The environmental score, measuring the company's impact on the environment.
    pub environment: Option<f64>,
    /// The social score, measuring the company's performance on issues like labor practices and human rights.
    pub social: Option<f64>,
    /// The governance score, measuring the company's corporate governance practices.
    pub governance: Option<f64>,
}

impl EsgScore {
    /// Builds a score from raw 0-100 provider values.
    ///
    /// Returns `None` when none of the three sub-scores is present.
    #[must_use]
    pub fn from_raw_percent(
        environment: Option<f64>,
        social: Option<f64>,
        governance: Option<f64>,
    ) -> Option<Self> {
        if environment.is_none() && social.is_none() && governance.is_none() {
            return None;
        }
        Some(Self {
            environment: environment.map(percent_to_fraction),
            social: social.map(percent_to_fraction),
            governance: governance.map(percent_to_fraction),
        })
    }
}

fn percent_to_fraction(v: f64) -> f64 {
    v / 100.0
}

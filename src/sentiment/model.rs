use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The fixed sentiment vocabulary every model output is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Negative tone.
    Negative,
    /// Neither clearly negative nor positive.
    Neutral,
    /// Positive tone.
    Positive,
}

impl SentimentLabel {
    /// Lowercase name of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }

    /// Maps a model's native class name onto the fixed vocabulary.
    ///
    /// Matching is case-insensitive. Generic `LABEL_<n>` names are first resolved
    /// through the model's `labels`. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn normalize(raw: &str, labels: &LabelMap) -> Option<Self> {
        let name = labels.resolve(raw.trim());
        match name.to_ascii_lowercase().as_str() {
            "neg" | "negative" | "bearish" => Some(Self::Negative),
            "neu" | "neutral" => Some(Self::Neutral),
            "pos" | "positive" | "bullish" => Some(Self::Positive),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classification of one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    /// The winning class.
    pub label: SentimentLabel,
    /// Confidence of the winning class, a probability in `[0, 1]`.
    ///
    /// This is not a signed polarity: a confident negative scores as high as a
    /// confident positive.
    pub score: f64,
}

/// A model's class-index vocabulary (`id2label` in its config).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap(BTreeMap<usize, String>);

impl LabelMap {
    /// Builds a map from `(index, name)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (usize, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Class names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Resolves `LABEL_<n>` through the map; any other name is returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        let index = raw
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("label_"))
            .and_then(|_| raw[6..].parse::<usize>().ok());
        match index.and_then(|i| self.0.get(&i)) {
            Some(name) => name,
            None => raw,
        }
    }
}

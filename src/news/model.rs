use serde::Serialize;

/// A single news article as returned by a [`NewsSource`](crate::NewsSource).
///
/// Articles have no identity beyond their position in the fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Publish timestamp exactly as the provider sent it (ISO 8601).
    pub published_at: String,
    /// Name of the publishing outlet; empty when the provider omits it.
    pub source: String,
    /// The headline.
    pub title: String,
}

/// Builds the search query for a company: its display name or its ticker.
///
/// When the name lookup fell back to the ticker the query is just the ticker.
#[must_use]
pub fn company_query(company_name: &str, ticker: &str) -> String {
    let name = company_name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case(ticker) {
        ticker.to_string()
    } else {
        format!("{name} OR {ticker}")
    }
}

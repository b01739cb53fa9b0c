use serde::Deserialize;

/// Yahoo wraps most numbers as `{ "raw": 12.3, "fmt": "12.30" }`.
#[derive(Deserialize, Clone, Copy)]
pub(crate) struct RawNum<T> {
    pub(crate) raw: Option<T>,
}

pub(crate) fn from_raw<T>(raw: Option<RawNum<T>>) -> Option<T> {
    raw.and_then(|n| n.raw)
}

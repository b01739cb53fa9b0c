//! Core components of the `esg-pulse` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The shared [`PulseClient`] and its builder.
//! - The transport error [`PulseError`] and the provider error taxonomy.
//! - The immutable [`Config`] read once at startup.
//! - The provider traits the dashboard is assembled from.

/// The shared client (`PulseClient`) and its builder.
pub mod client;
/// Immutable runtime configuration.
pub mod config;
/// Error types for the crate.
pub mod error;
/// Data models shared across modules.
pub mod models;
/// Provider traits abstracting every external collaborator.
pub mod services;

pub(crate) mod net;
pub(crate) mod quotesummary;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub use client::{PulseClient, PulseClientBuilder};
pub use config::Config;
pub use error::{ClassifyError, DataProviderError, ModelLoadError, NewsFetchError, PulseError};
pub use models::{Diagnostic, DiagnosticKind};
pub use services::{
    CompanyDirectory, EsgProvider, NewsSource, PriceProvider, SentimentClassifier, ServiceFuture,
};

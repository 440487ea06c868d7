// Record sources
// Strategy selection between the built-in fixture and a remote JSON
// endpoint; callers hold a Box<dyn DataSource> and never branch on the
// variant themselves.

pub mod fixture;
pub mod http;

use pivotgrid_config::settings::{Settings, SourceKind};
use pivotgrid_core::Record;

pub use fixture::FixtureSource;
pub use http::HttpSource;

/// Why a dataset load failed. A failed load leaves the caller's
/// previous dataset untouched; there is no partial delivery.
#[derive(Debug)]
pub enum SourceError {
    /// Transport failure (DNS, connect, TLS, timeout)
    Network(String),
    /// Endpoint answered with a non-success status
    Status(u16),
    /// Body was not valid JSON
    Parse(String),
    /// Body was JSON but not a list of uniform scalar objects
    Shape(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Status(code) => write!(f, "endpoint returned HTTP {code}"),
            SourceError::Parse(msg) => write!(f, "response is not valid JSON: {msg}"),
            SourceError::Shape(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A producer of one full dataset. Loads are single-shot: no retry, no
/// streaming. Each call returns a fresh record list.
pub trait DataSource {
    /// Short name for progress/error messages ("fixture", "remote")
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<Record>, SourceError>;
}

/// Pick the source the settings ask for.
pub fn from_settings(settings: &Settings) -> Box<dyn DataSource> {
    match settings.source {
        SourceKind::Fixture => Box::new(FixtureSource::new()),
        SourceKind::Remote => Box::new(HttpSource::new(
            settings.endpoint.clone(),
            settings.records_path.clone(),
        )),
    }
}

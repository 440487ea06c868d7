// Remote JSON endpoint source
// Single-shot blocking GET: the endpoint either delivers a full record
// list or the load fails. No retry, no streaming, no partial results.

use std::time::Duration;

use pivotgrid_core::Record;
use pivotgrid_io::json::records_at_path;

use crate::{DataSource, SourceError};

const USER_AGENT: &str = concat!("pgrid/", env!("CARGO_PKG_VERSION"));

pub struct HttpSource {
    endpoint: String,
    records_path: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(endpoint: String, records_path: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        HttpSource {
            endpoint,
            records_path,
            client,
        }
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn load(&self) -> Result<Vec<Record>, SourceError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        records_at_path(&body, &self.records_path).map_err(SourceError::Shape)
    }
}

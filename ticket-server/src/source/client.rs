//! HTTP ticket source.
//!
//! Fetches the ticket collection from a fixed resource path relative to a
//! configured base URL and validates it into domain tickets.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Ticket;

use super::convert::convert_tickets;
use super::error::SourceError;
use super::fetch::TicketSource;
use super::types::TicketsPayload;

/// Default resource path for the ticket collection.
const DEFAULT_RESOURCE: &str = "tickets.json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP ticket source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the ticket host
    pub base_url: String,
    /// Resource path fetched for the collection
    pub resource: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            resource: DEFAULT_RESOURCE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom resource path.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the ticket source.
#[derive(Debug, Clone)]
pub struct HttpTicketSource {
    http: reqwest::Client,
    url: String,
}

impl HttpTicketSource {
    /// Create a new source with the given configuration.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.resource
        );

        Ok(Self { http, url })
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>, SourceError> {
        debug!(url = %self.url, "fetching tickets");

        let response = self.http.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: TicketsPayload =
            serde_json::from_str(&body).map_err(|e| SourceError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let tickets = convert_tickets(&payload)?;
        debug!(count = tickets.len(), "fetched tickets");
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn config_defaults() {
        let config = SourceConfig::new("http://localhost:8080");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.resource, DEFAULT_RESOURCE);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = SourceConfig::new("http://localhost:8080")
            .with_resource("v2/tickets.json")
            .with_timeout(5);

        assert_eq!(config.resource, "v2/tickets.json");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalised() {
        let source = HttpTicketSource::new(SourceConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(source.url, "http://localhost:8080/tickets.json");
    }

    fn ticket_json() -> serde_json::Value {
        serde_json::json!({
            "departure_time": "12:00",
            "arrival_time": "16:30",
            "origin": "MOW",
            "destination": "HKT",
            "origin_name": "Москва",
            "destination_name": "Пхукет",
            "departure_date": "2023-05-01",
            "arrival_date": "2023-05-01",
            "price": 12400,
            "stops": 1,
            "carrier": "S7"
        })
    }

    #[tokio::test]
    async fn fetches_and_validates_tickets() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/tickets.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "tickets": [ticket_json()] }));
        });

        let source = HttpTicketSource::new(SourceConfig::new(server.base_url())).unwrap();
        let tickets = source.fetch_tickets().await.unwrap();

        mock.assert();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].carrier.as_str(), "S7");
        assert_eq!(tickets[0].price.get(), 12400.0);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tickets.json");
            then.status(500).body("boom");
        });

        let source = HttpTicketSource::new(SourceConfig::new(server.base_url())).unwrap();
        let err = source.fetch_tickets().await.unwrap_err();

        match err {
            SourceError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tickets.json");
            then.status(200).body("not json at all");
        });

        let source = HttpTicketSource::new(SourceConfig::new(server.base_url())).unwrap();
        let err = source.fetch_tickets().await.unwrap_err();

        match err {
            SourceError::Json { body, .. } => {
                assert_eq!(body.as_deref(), Some("not json at all"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_record_is_an_error() {
        let server = MockServer::start();
        let mut bad = ticket_json();
        bad["price"] = serde_json::json!(-1);
        server.mock(|when, then| {
            when.method(GET).path("/tickets.json");
            then.status(200)
                .json_body(serde_json::json!({ "tickets": [bad] }));
        });

        let source = HttpTicketSource::new(SourceConfig::new(server.base_url())).unwrap();
        let err = source.fetch_tickets().await.unwrap_err();

        match err {
            SourceError::Invalid(e) => assert_eq!(e.field, "price"),
            other => panic!("expected Invalid error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_resource_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/tickets.json");
            then.status(200)
                .json_body(serde_json::json!({ "tickets": [] }));
        });

        let config = SourceConfig::new(server.base_url()).with_resource("v2/tickets.json");
        let source = HttpTicketSource::new(config).unwrap();
        let tickets = source.fetch_tickets().await.unwrap();

        mock.assert();
        assert!(tickets.is_empty());
    }
}

//! Service readiness probes.
//!
//! After `compose up` the backing services need time to come up. We poll
//! each one (TCP connect for Kafka and Zookeeper, HTTP 200 for
//! Elasticsearch and Kibana) up to a fixed number of attempts before
//! declaring it unready.

use crate::constants::{defaults, endpoints};
use crate::errors::{ProvisionError, ProvisionResult};
use serde::Serialize;
use std::time::Duration;
use tokio::net::TcpStream;

/// How a service announces readiness.
#[derive(Clone, Debug)]
pub enum Endpoint {
    /// Ready when a plain TCP connect succeeds.
    Tcp(String),
    /// Ready when a GET returns a success status.
    Http(String),
}

impl Endpoint {
    pub fn address(&self) -> &str {
        match self {
            Endpoint::Tcp(addr) => addr,
            Endpoint::Http(url) => url,
        }
    }
}

/// One backing service of the stack.
#[derive(Clone, Debug)]
pub struct Service {
    pub name: &'static str,
    pub endpoint: Endpoint,
    /// Whether the stack is unusable without this service.
    pub critical: bool,
    /// Whether startup blocks on this service. Zookeeper is internal to
    /// Kafka; a ready Kafka implies it, so startup never waits on it.
    pub awaited: bool,
}

/// Polling knobs: 30 attempts, 2 seconds apart, by default.
#[derive(Clone, Debug)]
pub struct ProbeOptions {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            attempts: defaults::READY_ATTEMPTS,
            interval: Duration::from_secs(defaults::READY_INTERVAL_SECS),
        }
    }
}

/// Point-in-time view of one service, for `status` output.
#[derive(Clone, Debug, Serialize)]
pub struct ServiceStatus {
    pub name: &'static str,
    pub endpoint: String,
    pub running: bool,
}

/// The services the sentiment stack runs on.
///
/// Kibana is a convenience frontend; the stack works without it, so it is
/// not critical.
pub fn stack_services() -> Vec<Service> {
    vec![
        Service {
            name: "zookeeper",
            endpoint: Endpoint::Tcp(endpoints::ZOOKEEPER_ADDR.to_string()),
            critical: false,
            awaited: false,
        },
        Service {
            name: "kafka",
            endpoint: Endpoint::Tcp(endpoints::KAFKA_ADDR.to_string()),
            critical: true,
            awaited: true,
        },
        Service {
            name: "elasticsearch",
            endpoint: Endpoint::Http(endpoints::ELASTICSEARCH_URL.to_string()),
            critical: true,
            awaited: true,
        },
        Service {
            name: "kibana",
            endpoint: Endpoint::Http(endpoints::KIBANA_STATUS_URL.to_string()),
            critical: false,
            awaited: true,
        },
    ]
}

/// The services `up` blocks on after `compose up`.
pub fn awaited_services() -> Vec<Service> {
    stack_services().into_iter().filter(|s| s.awaited).collect()
}

/// HTTP client for probes, with a short per-request timeout so a hung
/// service counts as not ready instead of stalling the poll loop.
pub fn probe_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(defaults::PROBE_TIMEOUT_SECS))
        .build()
}

/// One probe attempt. Any connect or HTTP error means "not ready yet".
pub async fn probe_once(endpoint: &Endpoint, client: &reqwest::Client) -> bool {
    match endpoint {
        Endpoint::Tcp(addr) => TcpStream::connect(addr.as_str()).await.is_ok(),
        Endpoint::Http(url) => match client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        },
    }
}

/// Poll a service until it is ready or attempts are exhausted.
pub async fn wait_ready(
    service: &Service,
    opts: &ProbeOptions,
    client: &reqwest::Client,
) -> ProvisionResult<()> {
    for attempt in 1..=opts.attempts {
        if probe_once(&service.endpoint, client).await {
            println!("{} is ready", service.name);
            return Ok(());
        }
        println!(
            "Waiting for {}... ({}/{})",
            service.name, attempt, opts.attempts
        );
        tokio::time::sleep(opts.interval).await;
    }

    Err(ProvisionError::ServiceUnready {
        service: service.name.to_string(),
        attempts: opts.attempts,
    })
}

/// Probe every stack service exactly once.
pub async fn stack_status(client: &reqwest::Client) -> Vec<ServiceStatus> {
    let mut statuses = Vec::new();
    for service in stack_services() {
        let running = probe_once(&service.endpoint, client).await;
        statuses.push(ServiceStatus {
            name: service.name,
            endpoint: service.endpoint.address().to_string(),
            running,
        });
    }
    statuses
}

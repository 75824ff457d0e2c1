//! Well-known endpoints and defaults for the sentiment stack.

/// External tools the sequencer depends on.
pub mod tools {
    pub const DOCKER: &str = "docker";
    pub const DOCKER_COMPOSE: &str = "docker-compose";
    pub const PYTHON: &str = "python";
    pub const PIP: &str = "pip";

    pub const DOCKER_INSTALL_URL: &str = "https://www.docker.com/products/docker-desktop";
}

/// Where the backing services and the dashboard listen.
pub mod endpoints {
    pub const DASHBOARD_URL: &str = "http://localhost:5000";
    pub const KIBANA_URL: &str = "http://localhost:5601";
    pub const KIBANA_STATUS_URL: &str = "http://localhost:5601/api/status";
    pub const ELASTICSEARCH_URL: &str = "http://localhost:9200";
    pub const KAFKA_ADDR: &str = "localhost:9092";
    pub const ZOOKEEPER_ADDR: &str = "localhost:2181";
}

/// Defaults for the provisioning plan.
pub mod defaults {
    pub const COMPOSE_FILE: &str = "docker-compose.yml";
    pub const REQUIREMENTS_FILE: &str = "requirements.txt";
    pub const APP_ENTRYPOINT: &str = "run.py";

    /// Readiness polling: attempts and seconds between them.
    pub const READY_ATTEMPTS: u32 = 30;
    pub const READY_INTERVAL_SECS: u64 = 2;

    /// Timeout for a single HTTP readiness probe.
    pub const PROBE_TIMEOUT_SECS: u64 = 5;
}

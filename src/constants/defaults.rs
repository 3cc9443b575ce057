use std::time::Duration;

pub const GRAPH_BETA_BASE_URL: &str = "https://graph.microsoft.com/beta";
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const MAX_RETRY_ELAPSED: Duration = Duration::from_secs(180);
pub const RETRY_INITIAL_INTERVAL: Duration = Duration::from_secs(3);
pub const LOG_LEVEL: &str = "info";

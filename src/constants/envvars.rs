pub const GRAPH_BETA_BASE_URL: &str = "GRAPH_BETA_BASE_URL";
pub const GRAPH_ACCESS_TOKEN: &str = "GRAPH_ACCESS_TOKEN";
pub const GRAPH_REQUEST_TIMEOUT_SECS: &str = "GRAPH_REQUEST_TIMEOUT_SECS";
pub const GRAPH_MAX_RETRY_SECS: &str = "GRAPH_MAX_RETRY_SECS";

// Any non-empty value turns on request/response logging at info level
pub const LOG_GRAPH_REQUESTS: &str = "LOG_GRAPH_REQUESTS";

pub const LOG_LEVEL: &str = "LOG_LEVEL";

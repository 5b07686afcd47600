//! Configuration constants.
//!
//! Defaults for the event service, local files, and the network retry policy.

/// FDSN event query endpoint operated by INGV.
pub const INGV_EVENT_URL: &str = "https://webservices.ingv.it/fdsnws/event/1/query";

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "earthquakes.db";

/// Default bounding-box CSV file.
pub const DEFAULT_BBOX_PATH: &str = "bounding_box.csv";

/// User-Agent sent with every event query.
pub const DEFAULT_USER_AGENT: &str = concat!("earthquakes/", env!("CARGO_PKG_VERSION"));

/// Timestamp layout for the `starttime`/`endtime` query parameters (always UTC).
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Retry strategy
/// Base of the exponential backoff (delay = base^n * factor milliseconds)
pub const RETRY_BACKOFF_BASE_MS: u64 = 2;
/// Multiplier applied to each backoff step, giving 500ms, 1s, 2s, ...
pub const RETRY_FACTOR: u64 = 250;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 10;
/// Maximum number of attempts, including the initial one
pub const RETRY_MAX_ATTEMPTS: usize = 3;

// HTTP status codes
/// Rate-limited; worth retrying after a backoff
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

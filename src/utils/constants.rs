/// StarWatch defaults and fixed values

/// gRPC address of the dish on its local network
pub const DEFAULT_DISH_ADDRESS: &str = "192.168.100.1:9200";

/// CSV log destination when none is configured
pub const DEFAULT_LOG_FILE: &str = "starwatch-log.csv";

/// Diagnostic (tracing) log file name
pub const TRACE_LOG_FILE: &str = "starwatch.log";

/// Seconds between status reads
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Seconds to wait after a failed status read
pub const DEFAULT_FAILURE_BACKOFF_SECS: u64 = 5;

/// Entries kept in the on-screen event log
pub const EVENT_LOG_CAPACITY: usize = 100;

/// Characters of the build id shown on the dashboard
pub const BUILD_ID_DISPLAY_CHARS: usize = 10;

/// Directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "starwatch";

pub const UNREACHABLE_MESSAGE: &str = "DISH UNREACHABLE";
pub const OFFLINE_EVENT_MESSAGE: &str = "Dish appears to be offline!";

/// Base path of the user-management REST API.
pub const API_BASE_PATH: &str = "/api/v1";

/// Default base URL for the Growfolio user service.
pub const DEFAULT_API_URL: &str = "https://api.growfolio.app";

/// Seconds a transient success notice stays visible before auto-dismissing.
pub const NOTICE_DISMISS_SECS: u64 = 3;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between fetch tasks and the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered refresh ticks
    pub const TRIGGER_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Symbol used when neither the command line nor the config file names one
    pub const DEFAULT_SYMBOL: &str = "NIFTY";

    /// Placeholder shown for absent optional fields
    pub const PLACEHOLDER: &str = "-";

    /// Maximum length of the editable symbol field
    pub const MAX_SYMBOL_LEN: usize = 32;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Analytics endpoint path on the backend
    pub const ANALYTICS_ENDPOINT: &str = "api/data";

    /// Fallback failure reason when the server does not supply one
    pub const GENERIC_FAILURE: &str = "Fetch failed";

    /// Refresh timing configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between automatic refreshes (seconds)
        pub const DEFAULT_INTERVAL_SECS: u64 = 60;

        /// TCP connect timeout for the analytics client (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for the analytics client (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}

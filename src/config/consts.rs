// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
pub const TIMEOUT_SECS: u64 = 10;
pub const FETCH_RETRIES: u32 = 3;
pub const BACKOFF_MS: u64 = 500; // multiplied by attempt number

// Config
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_DATE_GROUP: &str = "div.margin-date";

// Extraction
pub const CELL_SELECTOR: &str = "td";
pub const LINK_SELECTOR: &str = "a";

// Export
pub const DEFAULT_FILE: &str = "lines";
pub const DEFAULT_LOG_FILE: &str = "app.log";

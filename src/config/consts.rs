// src/config/consts.rs

// Net config
pub const URL_ENV_VAR: &str = "BOKAT_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Roster table detection. The signup page is Swedish; the header labels
// are fixed site furniture, not user content.
pub const HEADER_ANCHOR: &str = "Status";
pub const REQUIRED_HEADERS: [&str; 4] = ["Status", "Namn", "Gäst", "Kommentar"];

// Row parsing
pub const NAME_CELL_CLASS: &str = "TextSmall";
pub const ICON_PREFIX: &str = "/images/";
pub const ICON_SUFFIX: &str = ".png";
pub const ATTENDING_ICON: &str = "yes";

// Export
pub const DEFAULT_ROSTER_HEADERS: [&str; 2] = ["Name", "Status"];

// Logging
pub const LOG_FILE: &str = "debug.log";

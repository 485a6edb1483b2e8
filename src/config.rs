use chrono_tz::Tz;

const DEFAULT_CSV_FOLDER: &str = "data";
const DEFAULT_INTERVAL_MINUTES: u64 = 10;
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Output folder for position snapshots, relative to the working
    /// directory unless absolute. Created at startup if absent.
    pub csv_folder: String,

    /// Minutes between extract runs.
    ///
    /// The first run fires immediately on startup regardless of this value.
    pub extract_interval_minutes: u64,

    /// Named civil time zone anchoring the trading day.
    pub timezone: Tz,

    /// Emit JSON-formatted logs (production formatting).
    pub log_json: bool,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// Malformed values are not startup errors: they silently fall back to
    /// the defaults, so a bad deployment setting degrades to default
    /// behavior rather than a crash loop.
    pub fn from_env() -> Self {
        Self {
            csv_folder: std::env::var("CSV_FOLDER_PATH")
                .unwrap_or_else(|_| DEFAULT_CSV_FOLDER.to_string()),
            extract_interval_minutes: parse_interval(
                std::env::var("EXTRACT_INTERVAL_MINUTES").ok(),
            ),
            timezone: parse_timezone(std::env::var("LOCAL_TIMEZONE").ok()),
            log_json: std::env::var("LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn parse_interval(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_INTERVAL_MINUTES)
}

fn parse_timezone(raw: Option<String>) -> Tz {
    raw.and_then(|v| v.trim().parse::<Tz>().ok())
        .unwrap_or(DEFAULT_TIMEZONE)
}

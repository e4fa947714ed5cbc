use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "forecast_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prefix prepended to every endpoint path. Empty means same origin,
    /// which is how the dashboard is normally served.
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Id of the `<script type="application/json">` element holding the
    /// chart series
    pub chart_data_id: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
            chart_data_id: "forecast-chart-data".to_string(),
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Overrides for pointing a local build at another backend
        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
            };

            if let Some(api_base) = read("api_base") {
                settings.api_base = api_base.trim_end_matches('/').to_string();
            }

            if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }

            if let Some(chart_data_id) = read("chart_data_id") {
                settings.chart_data_id = chart_data_id;
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

use std::sync::OnceLock;

use widget_types::WidgetConfig;

static CONFIG: OnceLock<WidgetConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "gallery.toml";

/// Copy compiled into the binary, used when no file is found at runtime
/// (always the case on the web).
const BUNDLED_CONFIG: &str = include_str!("../gallery.toml");

/// Read `gallery.toml` and store the parsed config in the global `OnceLock`.
/// Only the first call has effect.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_or_default(&contents, CONFIG_PATH),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not readable ({e}), using bundled defaults");
            parse_or_default(BUNDLED_CONFIG, "bundled config")
        }
    });
}

/// Get the loaded config. Returns built-in defaults if `load_config()`
/// hasn't been called yet.
pub fn config() -> &'static WidgetConfig {
    static DEFAULT: OnceLock<WidgetConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(WidgetConfig::default))
}

fn parse_or_default(contents: &str, source: &str) -> WidgetConfig {
    match WidgetConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(
                options = config.gallery.options.len(),
                toast_ms = config.toast.duration_ms,
                "loaded widget config from {source}"
            );
            config
        }
        Err(e) => {
            tracing::warn!("failed to parse {source}: {e}, falling back to defaults");
            WidgetConfig::default()
        }
    }
}

//! Settings command
//!
//! Shows the settings resolved from the process environment, with any API
//! key redacted.

use anyhow::Result;
use praxis_core::Settings;

use crate::cli::SettingsArgs;
use crate::output;

#[derive(serde::Serialize, serde::Deserialize)]
struct SettingsJson {
    app_name: String,
    debug: bool,
    log_level: String,
    data_dir: Option<String>,
    api_key: Option<String>,
    api_url: String,
}

impl SettingsJson {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            debug: settings.debug,
            log_level: settings.log_level.clone(),
            data_dir: settings.data_dir.as_ref().map(|d| d.to_string()),
            api_key: settings.api_key.as_ref().map(|_| redacted()),
            api_url: settings.api_url.clone(),
        }
    }
}

fn redacted() -> String {
    "[REDACTED]".to_string()
}

pub fn run(args: SettingsArgs, settings: &Settings) -> Result<()> {
    if args.json {
        let json = SettingsJson::from_settings(settings);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        output::header("Resolved Settings");
        output::kv("app_name", &settings.app_name);
        output::kv("debug", &settings.debug.to_string());
        output::kv("log_level", &settings.log_level);
        output::kv(
            "data_dir",
            settings.data_dir.as_ref().map_or("(unset)", |d| d.as_str()),
        );
        output::kv(
            "api_key",
            if settings.api_key.is_some() {
                "[REDACTED]"
            } else {
                "(unset)"
            },
        );
        output::kv("api_url", &settings.api_url);
    }

    Ok(())
}

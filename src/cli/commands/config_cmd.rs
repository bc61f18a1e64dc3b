//! config command - Show the effective configuration

use serde::Serialize;

use super::print_json;
use crate::cli::{Context, Outcome};
use crate::core::config::{Config, Settings};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// JSON shape of `config --json`.
#[derive(Debug, Serialize)]
struct ConfigOutput {
    loaded_from: Option<String>,
    settings: Settings,
}

/// Settings with every default filled in.
fn effective_settings(config: &Config) -> Result<Settings> {
    let preset = config
        .default_preset()
        .context("Failed to resolve default preset")?;
    Ok(Settings {
        scan: Some(config.scan_mode()),
        warn_asymmetric: Some(config.warn_asymmetric()),
        default_preset: Some(preset.name().to_string()),
    })
}

/// Show the effective configuration and where it was loaded from.
pub fn config(ctx: &Context) -> Result<Outcome> {
    let settings = effective_settings(&ctx.config)?;
    let loaded_from = ctx
        .config
        .loaded_from()
        .map(|path| path.display().to_string());

    if ctx.json {
        print_json(&ConfigOutput {
            loaded_from,
            settings,
        })?;
        return Ok(Outcome::Success);
    }

    let header = match &loaded_from {
        Some(path) => format!("# loaded from {}", path),
        None => "# no config file found, showing defaults".to_string(),
    };
    let body = toml::to_string(&settings).context("Failed to format configuration")?;
    output::print(format!("{}\n{}", header, body.trim_end()), ctx.verbosity);

    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::ScanMode;

    #[test]
    fn effective_settings_fill_defaults() {
        let settings = effective_settings(&Config::default()).unwrap();
        assert_eq!(settings.scan, Some(ScanMode::FirstConflict));
        assert_eq!(settings.warn_asymmetric, Some(true));
        assert_eq!(settings.default_preset.as_deref(), Some("australia"));
    }

    #[test]
    fn effective_settings_keep_configured_values() {
        let mut config = Config::default();
        config.settings.scan = Some(ScanMode::AllConflicts);
        let settings = effective_settings(&config).unwrap();
        assert_eq!(settings.scan, Some(ScanMode::AllConflicts));
    }
}

//! Load/save of the last-viewed-report selection.
//!
//! The settings file is a flat TOML table of the five selection fields,
//! written once at clean shutdown and read back on the next startup. A
//! missing file simply means "no prior selection"; a malformed one is
//! reported to the caller, which logs and proceeds the same way.

use std::{fs, path::Path};

use rer_core::{RerError, RerResult, Selection};

/// Fixed name of the settings file inside the data directory.
pub const SETTINGS_FILENAME: &str = "report-settings.toml";

/// Load the persisted selection, or `None` when no settings file exists.
pub fn load_settings(path: &Path) -> RerResult<Option<Selection>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let selection =
        toml::from_str(&text).map_err(|err| RerError::Settings(err.to_string()))?;
    Ok(Some(selection))
}

/// Persist the selection to `path`, overwriting any previous file.
pub fn save_settings(path: &Path, selection: &Selection) -> RerResult<()> {
    let text =
        toml::to_string(selection).map_err(|err| RerError::Settings(err.to_string()))?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rer_core::ReportKind;
    use tempfile::tempdir;

    #[test]
    fn missing_file_means_no_prior_selection() {
        let dir = tempdir().unwrap();
        let loaded = load_settings(&dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let selection = Selection {
            report_type: ReportKind::PercentRange,
            country_index: 4,
            source_type: "geothermal".to_string(),
            min_percent: 12.5,
            max_percent: 87.5,
        };
        save_settings(&path, &selection).unwrap();

        let loaded = load_settings(&path).unwrap().expect("settings saved above");
        assert_eq!(loaded, selection);
    }

    #[test]
    fn round_trips_the_unset_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        save_settings(&path, &Selection::default()).unwrap();
        let loaded = load_settings(&path).unwrap().unwrap();
        assert_eq!(loaded, Selection::default());
    }

    #[test]
    fn persisted_fields_use_the_settings_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let selection = Selection {
            report_type: ReportKind::Country,
            country_index: 2,
            ..Selection::default()
        };
        save_settings(&path, &selection).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("reportType"));
        assert!(text.contains("countryIndex"));
        assert!(text.contains("sourceType"));
        assert!(text.contains("minPercent"));
        assert!(text.contains("maxPercent"));
        assert!(text.contains("\"country\""));
    }

    #[test]
    fn malformed_settings_are_a_settings_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, "reportType = \"country\"\ncountryIndex = \"not a number\"\n").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, RerError::Settings(_)));
    }
}

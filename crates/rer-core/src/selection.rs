//! The persisted record of which report the user last viewed.
//!
//! The shell updates a [`Selection`] in memory on every menu action; the
//! settings store flushes it once at clean shutdown and reads it back on the
//! next startup to replay the report. Field names follow the settings file
//! (`reportType`, `countryIndex`, ...).

use serde::{Deserialize, Serialize};

/// Which report the selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Country,
    Source,
    PercentRange,
    /// No report viewed yet; nothing to replay.
    #[default]
    None,
}

/// Last chosen report plus its parameters.
///
/// Parameters for the other report kinds keep their unset defaults:
/// `country_index` is -1, `source_type` is empty, the percent bounds are
/// 0 and 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub report_type: ReportKind,
    pub country_index: i64,
    pub source_type: String,
    pub min_percent: f64,
    pub max_percent: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            report_type: ReportKind::None,
            country_index: -1,
            source_type: String::new(),
            min_percent: 0.0,
            max_percent: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_has_nothing_to_replay() {
        let selection = Selection::default();
        assert_eq!(selection.report_type, ReportKind::None);
        assert_eq!(selection.country_index, -1);
        assert!(selection.source_type.is_empty());
        assert_eq!(selection.min_percent, 0.0);
        assert_eq!(selection.max_percent, 100.0);
    }
}

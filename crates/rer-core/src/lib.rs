//! # rer-core: Renewable Electricity Report Model
//!
//! Fundamental data structures for the renewable-electricity report tool.
//!
//! The dataset is a flat, ordered list of countries. Each country carries its
//! per-source generation figures and one aggregate totals record. The dataset
//! is loaded once at startup and never mutated; every report is a read-only
//! scan over it.
//!
//! ## Quick Start
//!
//! ```rust
//! use rer_core::*;
//!
//! let dataset = Dataset {
//!     countries: vec![Country {
//!         name: "Iceland".to_string(),
//!         sources: vec![Source {
//!             kind: "hydro".to_string(),
//!             amount: 12000.0,
//!             percent_of_all: 70.0,
//!             percent_of_renewables: 72.0,
//!         }],
//!         totals: Totals {
//!             all_sources: 17000.0,
//!             all_renewables: 16800.0,
//!             renewable_percent: 98.82,
//!         },
//!     }],
//! };
//!
//! let report = country_report(&dataset, 0).unwrap();
//! assert_eq!(report.matches, 1);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Unified error type for the report tool
//! - [`report`] - Read-only report queries and table formatting
//! - [`selection`] - The persisted last-viewed-report record

use serde::{Deserialize, Serialize};

pub mod error;
pub mod report;
pub mod selection;

pub use error::{RerError, RerResult};
pub use report::{
    country_report, distinct_source_types, percent_range_report, source_report, Report,
};
pub use selection::{ReportKind, Selection};

/// One electricity-generation method reported for a country.
///
/// A source belongs to exactly one [`Country`]; the same `kind` string may
/// appear under many countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Generation method, e.g. "solar", "wind", "hydro".
    #[serde(rename = "type")]
    pub kind: String,
    /// Electricity generated from this source (GWh).
    pub amount: f64,
    /// Share of the country's total generation, 0-100.
    pub percent_of_all: f64,
    /// Share of the country's renewable generation, 0-100.
    pub percent_of_renewables: f64,
}

/// A country's aggregate generation figures.
///
/// `renewable_percent` is trusted from the input file and never re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Total electricity generated, all sources (GWh).
    pub all_sources: f64,
    /// Renewable portion of the total (GWh).
    pub all_renewables: f64,
    /// Renewable share of total generation, 0-100.
    pub renewable_percent: f64,
}

/// One country record: name, ordered source list, totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub sources: Vec<Source>,
    pub totals: Totals,
}

/// The full dataset: an ordered sequence of countries.
///
/// Loaded once at startup and immutable thereafter. Report ordering follows
/// this sequence (country order, then source order within a country).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
}

impl Dataset {
    /// Number of countries in the dataset.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

//! Read-only report queries and table formatting.
//!
//! Three stateless operations scan the [`Dataset`] and produce a [`Report`]:
//! a title, preformatted rows, and a match count. Rows use a fixed
//! four-column layout (label left-aligned to 20, three numeric columns
//! right-aligned to 10) so reports line up regardless of content.

use std::fmt;

use crate::{Dataset, RerError, RerResult};

/// One generated report: title, rows, and how many records matched.
///
/// The `Display` impl renders the full text block, including the
/// `"{n} match(es) found."` trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    rule_len: usize,
    pub rows: Vec<String>,
    pub matches: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(self.rule_len))?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(f, "{} match(es) found.", self.matches)
    }
}

const RULE_LEN: usize = 42;
const RANGE_RULE_LEN: usize = 81;

/// Report every source of the country at `index` (zero-based).
///
/// Fails with [`RerError::CountryIndex`] when `index` is outside the dataset.
/// Numeric values are printed raw, no rounding.
pub fn country_report(dataset: &Dataset, index: usize) -> RerResult<Report> {
    let country = dataset
        .countries
        .get(index)
        .ok_or(RerError::CountryIndex {
            index,
            count: dataset.countries.len(),
        })?;

    let rows: Vec<String> = country
        .sources
        .iter()
        .map(|source| {
            format!(
                "{:<20} {:>10} {:>10} {:>10}",
                source.kind, source.amount, source.percent_of_all, source.percent_of_renewables
            )
        })
        .collect();

    Ok(Report {
        title: format!("Renewable Electricity Production in {}", country.name),
        rule_len: RULE_LEN,
        matches: rows.len(),
        rows,
    })
}

/// Report every country producing electricity from `source_type`.
///
/// The match is exact and case-sensitive; zero matches is a valid report.
/// Ordering is the dataset's natural order.
pub fn source_report(dataset: &Dataset, source_type: &str) -> Report {
    let mut rows = Vec::new();
    for country in &dataset.countries {
        for source in &country.sources {
            if source.kind == source_type {
                rows.push(format!(
                    "{:<20} {:>10} {:>10} {:>10}",
                    country.name, source.amount, source.percent_of_all, source.percent_of_renewables
                ));
            }
        }
    }

    Report {
        title: format!("Electricity Production from {source_type}"),
        rule_len: RULE_LEN,
        matches: rows.len(),
        rows,
    }
}

/// Report every country whose renewable share lies in `[min, max]` inclusive.
///
/// Bounds are taken literally: `min > max` yields an empty range and values
/// outside 0-100 are not clamped. Generation totals are grouped with
/// thousands separators; the share is printed with two decimals.
pub fn percent_range_report(dataset: &Dataset, min: f64, max: f64) -> Report {
    let mut rows = Vec::new();
    for country in &dataset.countries {
        let totals = &country.totals;
        if totals.renewable_percent >= min && totals.renewable_percent <= max {
            rows.push(format!(
                "{:<20} {:>10} {:>10} {:>10.2}",
                country.name,
                group_thousands(totals.all_sources),
                group_thousands(totals.all_renewables),
                totals.renewable_percent
            ));
        }
    }

    Report {
        title: format!(
            "Countries Where Renewables Account for {min}% to {max}% of Electricity Generation"
        ),
        rule_len: RANGE_RULE_LEN,
        matches: rows.len(),
        rows,
    }
}

/// All source types across the dataset, first-occurrence order, no duplicates.
///
/// The source-selection menu lists these by position; the chosen report then
/// matches on the type string, not the position.
pub fn distinct_source_types(dataset: &Dataset) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for country in &dataset.countries {
        for source in &country.sources {
            if !types.iter().any(|t| t == &source.kind) {
                types.push(source.kind.clone());
            }
        }
    }
    types
}

/// Round to the nearest integer and insert a comma every three digits.
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Country, Source, Totals};

    fn source(kind: &str, amount: f64, of_all: f64, of_renewables: f64) -> Source {
        Source {
            kind: kind.to_string(),
            amount,
            percent_of_all: of_all,
            percent_of_renewables: of_renewables,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            countries: vec![
                Country {
                    name: "Iceland".to_string(),
                    sources: vec![source("hydro", 12000.0, 70.0, 72.0)],
                    totals: Totals {
                        all_sources: 17000.0,
                        all_renewables: 16800.0,
                        renewable_percent: 98.82,
                    },
                },
                Country {
                    name: "Norway".to_string(),
                    sources: vec![
                        source("hydro", 138000.0, 88.0, 92.0),
                        source("wind", 11800.0, 7.5, 7.9),
                    ],
                    totals: Totals {
                        all_sources: 157000.0,
                        all_renewables: 149800.0,
                        renewable_percent: 95.41,
                    },
                },
                Country {
                    name: "Germany".to_string(),
                    sources: vec![
                        source("wind", 113000.0, 19.5, 47.0),
                        source("solar", 50000.0, 8.6, 21.0),
                    ],
                    totals: Totals {
                        all_sources: 580000.0,
                        all_renewables: 237000.0,
                        renewable_percent: 40.86,
                    },
                },
            ],
        }
    }

    #[test]
    fn country_report_row_count_matches_source_count() {
        let dataset = sample_dataset();
        for (index, country) in dataset.countries.iter().enumerate() {
            let report = country_report(&dataset, index).unwrap();
            assert_eq!(report.matches, country.sources.len());
            assert_eq!(report.rows.len(), country.sources.len());
        }
    }

    #[test]
    fn country_report_rejects_out_of_range_index() {
        let dataset = sample_dataset();
        let err = country_report(&dataset, 3).unwrap_err();
        assert!(matches!(err, RerError::CountryIndex { index: 3, count: 3 }));
    }

    #[test]
    fn country_report_formats_iceland_row() {
        let dataset = sample_dataset();
        let report = country_report(&dataset, 0).unwrap();
        assert_eq!(
            report.rows[0],
            "hydro                     12000         70         72"
        );
        let rendered = report.to_string();
        assert!(rendered.starts_with("Renewable Electricity Production in Iceland\n"));
        assert!(rendered.ends_with("1 match(es) found.\n"));
    }

    #[test]
    fn source_report_counts_exact_matches_across_countries() {
        let dataset = sample_dataset();
        assert_eq!(source_report(&dataset, "hydro").matches, 2);
        assert_eq!(source_report(&dataset, "wind").matches, 2);
        assert_eq!(source_report(&dataset, "solar").matches, 1);
    }

    #[test]
    fn source_report_match_is_case_sensitive() {
        let dataset = sample_dataset();
        let report = source_report(&dataset, "Hydro");
        assert_eq!(report.matches, 0);
        assert!(report.to_string().contains("0 match(es) found."));
    }

    #[test]
    fn source_report_rows_follow_dataset_order() {
        let dataset = sample_dataset();
        let report = source_report(&dataset, "wind");
        assert!(report.rows[0].starts_with("Norway"));
        assert!(report.rows[1].starts_with("Germany"));
    }

    #[test]
    fn percent_range_is_inclusive_on_both_bounds() {
        let dataset = sample_dataset();
        let report = percent_range_report(&dataset, 40.86, 95.41);
        assert_eq!(report.matches, 2);
        assert!(report.rows[0].starts_with("Norway"));
        assert!(report.rows[1].starts_with("Germany"));
    }

    #[test]
    fn percent_range_default_bounds_include_every_country_once() {
        let dataset = sample_dataset();
        let report = percent_range_report(&dataset, 0.0, 100.0);
        assert_eq!(report.matches, dataset.len());
    }

    #[test]
    fn percent_range_accepts_inverted_bounds_as_empty_range() {
        let dataset = sample_dataset();
        let report = percent_range_report(&dataset, 90.0, 10.0);
        assert_eq!(report.matches, 0);
    }

    #[test]
    fn percent_range_formats_iceland_totals() {
        let dataset = sample_dataset();
        let report = percent_range_report(&dataset, 90.0, 100.0);
        assert_eq!(
            report.rows[0],
            "Iceland                  17,000     16,800      98.82"
        );
        assert!(report
            .title
            .contains("Renewables Account for 90% to 100%"));
    }

    #[test]
    fn distinct_sources_preserve_first_occurrence_order() {
        let dataset = sample_dataset();
        assert_eq!(distinct_source_types(&dataset), ["hydro", "wind", "solar"]);
    }

    #[test]
    fn distinct_sources_empty_dataset() {
        assert!(distinct_source_types(&Dataset::default()).is_empty());
    }

    #[test]
    fn group_thousands_groups_digits() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(17000.0), "17,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(1234567.6), "1,234,568");
    }
}

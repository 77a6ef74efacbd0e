//! Loader for the renewable-electricity dataset file.
//!
//! The file is an XML tree with a `<renewable-electricity>` root holding one
//! `<country name="...">` element per country; each country nests
//! `<source type amount percent-of-all percent-of-renewables/>` elements and
//! one `<totals all-sources all-renewables renewable-percent/>` element.
//! There is no writer; the dataset is read-only for the program's lifetime.

use std::{fs, path::Path};

use quick_xml::{
    events::{BytesStart, Event},
    name::LocalName,
    Reader,
};
use rer_core::{Country, Dataset, RerError, RerResult, Source, Totals};

/// Fixed name of the dataset file inside the data directory.
pub const DATASET_FILENAME: &str = "renewable-electricity.xml";

/// Load the dataset from `path`.
///
/// Fails with [`RerError::Io`] when the file is missing or unreadable and
/// with [`RerError::Parse`] when the content is not the expected shape.
pub fn load_dataset(path: &Path) -> RerResult<Dataset> {
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

/// Parse dataset XML from a string.
pub fn parse_dataset(text: &str) -> RerResult<Dataset> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut countries: Vec<Country> = Vec::new();
    let mut current: Option<Country> = None;
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                open_element(e, false, &mut root_seen, &mut current, &mut countries)?;
            }
            Ok(Event::Empty(ref e)) => {
                open_element(e, true, &mut root_seen, &mut current, &mut countries)?;
            }
            Ok(Event::End(ref e)) => {
                if local_name_as_str(&e.local_name()) == "country" {
                    if let Some(country) = current.take() {
                        countries.push(country);
                    }
                }
            }
            Ok(Event::Eof) => {
                if current.is_some() {
                    return Err(RerError::Parse(
                        "unexpected end of file inside <country>".to_string(),
                    ));
                }
                break;
            }
            Err(err) => {
                return Err(RerError::Parse(format!(
                    "invalid XML at byte {}: {err}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if !root_seen {
        return Err(RerError::Parse(
            "no <renewable-electricity> root element found".to_string(),
        ));
    }

    Ok(Dataset { countries })
}

fn open_element(
    event: &BytesStart,
    self_closing: bool,
    root_seen: &mut bool,
    current: &mut Option<Country>,
    countries: &mut Vec<Country>,
) -> RerResult<()> {
    let name = event.local_name();
    let tag = local_name_as_str(&name);

    if !*root_seen {
        if tag != "renewable-electricity" {
            return Err(RerError::Parse(format!(
                "expected <renewable-electricity> root, found <{tag}>"
            )));
        }
        *root_seen = true;
        return Ok(());
    }

    match tag {
        "country" => {
            let country = Country {
                name: required_attribute(event, tag, "name")?,
                sources: Vec::new(),
                totals: Totals::default(),
            };
            if self_closing {
                countries.push(country);
            } else {
                *current = Some(country);
            }
        }
        "source" => {
            let country = current
                .as_mut()
                .ok_or_else(|| RerError::Parse("<source> outside <country>".to_string()))?;
            country.sources.push(Source {
                kind: required_attribute(event, tag, "type")?,
                amount: numeric_attribute(event, tag, "amount")?,
                percent_of_all: numeric_attribute(event, tag, "percent-of-all")?,
                percent_of_renewables: numeric_attribute(event, tag, "percent-of-renewables")?,
            });
        }
        "totals" => {
            let country = current
                .as_mut()
                .ok_or_else(|| RerError::Parse("<totals> outside <country>".to_string()))?;
            country.totals = Totals {
                all_sources: numeric_attribute(event, tag, "all-sources")?,
                all_renewables: numeric_attribute(event, tag, "all-renewables")?,
                renewable_percent: numeric_attribute(event, tag, "renewable-percent")?,
            };
        }
        _ => {}
    }

    Ok(())
}

fn attribute_value(event: &BytesStart, key: &str) -> RerResult<Option<String>> {
    for attr in event.attributes().with_checks(false) {
        let attr = attr.map_err(|err| RerError::Parse(err.to_string()))?;
        if let Ok(name) = std::str::from_utf8(attr.key.local_name().as_ref()) {
            if name.eq_ignore_ascii_case(key) {
                let value = attr
                    .unescape_value()
                    .map_err(|err| RerError::Parse(err.to_string()))?;
                return Ok(Some(value.into_owned()));
            }
        }
    }
    Ok(None)
}

fn required_attribute(event: &BytesStart, tag: &str, key: &str) -> RerResult<String> {
    attribute_value(event, key)?.ok_or_else(|| {
        RerError::Parse(format!("<{tag}> is missing the '{key}' attribute"))
    })
}

fn numeric_attribute(event: &BytesStart, tag: &str, key: &str) -> RerResult<f64> {
    let raw = required_attribute(event, tag, key)?;
    raw.trim().parse().map_err(|_| {
        RerError::Parse(format!("<{tag}> attribute '{key}' is not numeric: '{raw}'"))
    })
}

fn local_name_as_str<'a>(name: &'a LocalName<'a>) -> &'a str {
    std::str::from_utf8(name.as_ref()).unwrap_or_default()
}

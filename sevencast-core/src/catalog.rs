//! The city catalog: a read-only set of coordinates keyed by city and
//! country, loaded once per invocation from a line-oriented CSV source.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// A default catalog shipped with the crate, used when no cities file is
/// configured.
const DEFAULT_CITIES: &str = include_str!("../data/city_coordinates.csv");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read cities file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("city data source contained no usable records")]
    Empty,
}

/// One `latitude,longitude,city,country` record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl CityRecord {
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Typed composite lookup key over (city, country), case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CityKey {
    city: String,
    country: String,
}

impl CityKey {
    fn new(city: &str, country: &str) -> Self {
        Self { city: city.trim().to_lowercase(), country: country.trim().to_lowercase() }
    }
}

#[derive(Debug, Clone)]
pub struct CityCatalog {
    records: Vec<CityRecord>,
    index: HashMap<CityKey, usize>,
}

impl CityCatalog {
    /// Parses a line-oriented `latitude,longitude,city,country` source.
    ///
    /// A line is kept only if all four fields are present and non-empty and
    /// both coordinates parse as floats; anything else (blank lines, short
    /// lines, a header row) is skipped. Duplicate (city, country) pairs keep
    /// the first occurrence.
    pub fn parse(data: &str) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        let mut index = HashMap::new();

        for line in data.lines() {
            let Some(record) = parse_line(line) else {
                if !line.trim().is_empty() {
                    tracing::debug!("skipping malformed city record: {line:?}");
                }
                continue;
            };

            let key = CityKey::new(&record.city, &record.country);
            index.entry(key).or_insert(records.len());
            records.push(record);
        }

        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { records, index })
    }

    /// Reads and parses a cities file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.display().to_string(), source })?;
        Self::parse(&data)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(DEFAULT_CITIES)
    }

    /// Looks up a city, optionally narrowed by country. Without a country the
    /// first record whose city matches wins. A miss means no request should
    /// be issued.
    pub fn find(&self, city: &str, country: Option<&str>) -> Option<&CityRecord> {
        match country {
            Some(country) => {
                let key = CityKey::new(city, country);
                self.index.get(&key).map(|&i| &self.records[i])
            }
            None => {
                let wanted = city.trim().to_lowercase();
                self.records.iter().find(|r| r.city.to_lowercase() == wanted)
            }
        }
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Fixed field order; anything after the fourth comma is ignored.
fn parse_line(line: &str) -> Option<CityRecord> {
    let mut fields = line.split(',');
    let latitude = fields.next()?.trim();
    let longitude = fields.next()?.trim();
    let city = fields.next()?.trim();
    let country = fields.next()?.trim();

    if city.is_empty() || country.is_empty() {
        return None;
    }

    Some(CityRecord {
        latitude: latitude.parse().ok()?,
        longitude: longitude.parse().ok()?,
        city: city.to_string(),
        country: country.to_string(),
    })
}

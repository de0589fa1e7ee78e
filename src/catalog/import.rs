//! Loading an [`InMemoryCatalog`] from CSV.
//!
//! Two files describe a catalog:
//!
//! - `locations.csv` with header `id,name,place,latitude,longitude`
//! - `attributes.csv` with header `location_id,name,category,style`
//!
//! Empty text fields are read as missing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::{AttributeEntry, InMemoryCatalog};
use crate::error::CatalogError;
use crate::models::{Location, LocationId};

/// File name of the locations table inside a catalog directory.
pub const LOCATIONS_FILE: &str = "locations.csv";
/// File name of the attributes table inside a catalog directory.
pub const ATTRIBUTES_FILE: &str = "attributes.csv";

#[derive(Debug, Deserialize)]
struct CsvLocation {
    id: LocationId,
    name: Option<String>,
    place: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl CsvLocation {
    fn into_location(self, line: u64) -> Result<Location, CatalogError> {
        let mut location = Location::new(self.id, self.latitude, self.longitude);
        if !location.coordinates().is_valid() {
            return Err(CatalogError::InvalidRecord {
                line,
                reason: format!(
                    "location {} has invalid coordinates ({}, {})",
                    self.id, self.latitude, self.longitude
                ),
            });
        }
        if let Some(name) = self.name {
            location = location.with_name(name);
        }
        if let Some(place) = self.place {
            location = location.with_place(place);
        }
        Ok(location)
    }
}

/// Reads all rows of a CSV source, keeping each row's line number.
fn read_csv_entries<T, R: Read>(reader: R) -> Result<Vec<(u64, T)>, CatalogError>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut entries = vec![];

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        entries.push((line, record.deserialize(Some(&headers))?));
    }

    Ok(entries)
}

fn read_locations<R: Read>(reader: R) -> Result<Vec<Location>, CatalogError> {
    read_csv_entries::<CsvLocation, _>(reader)?
        .into_iter()
        .map(|(line, row)| row.into_location(line))
        .collect()
}

impl InMemoryCatalog {
    /// Builds a catalog from a locations table and an attributes table.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::catalog::InMemoryCatalog;
    ///
    /// let locations = "id,name,place,latitude,longitude\n307,Browar Okocim,Brzesko,49.968,20.61\n";
    /// let attributes = "location_id,name,category,style\n307,Okocim Porter,,Baltic Porter\n";
    /// let catalog = InMemoryCatalog::from_csv(locations.as_bytes(), attributes.as_bytes()).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_csv<L: Read, A: Read>(locations: L, attributes: A) -> Result<Self, CatalogError> {
        let locations = read_locations(locations)?;
        let attributes = read_csv_entries::<AttributeEntry, _>(attributes)?
            .into_iter()
            .map(|(_, entry)| entry);

        Ok(Self::new(locations).with_attributes(attributes))
    }

    /// Builds a catalog from a directory holding [`LOCATIONS_FILE`] and,
    /// optionally, [`ATTRIBUTES_FILE`].
    pub fn from_csv_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let locations = BufReader::new(File::open(dir.join(LOCATIONS_FILE))?);
        let attributes_path = dir.join(ATTRIBUTES_FILE);

        let catalog = if attributes_path.exists() {
            Self::from_csv(locations, BufReader::new(File::open(attributes_path)?))?
        } else {
            Self::new(read_locations(locations)?)
        };

        info!(
            "loaded catalog from {}: {} locations",
            dir.display(),
            catalog.len()
        );
        Ok(catalog)
    }
}

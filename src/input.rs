use std::{fs::File, io, path::Path, str::FromStr};

use log::debug;
use serde::Deserialize;

use crate::{
    catalogue::TransportCatalogue,
    error::{InvalidNotation, LoadError},
    geo::Coordinates,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusRecord {
    pub name: String,
    pub route: String,
}

/// A route written as `A > B > C > A` (roundtrip) or `A - B - C` (there and back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNotation {
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl FromStr for RouteNotation {
    type Err = InvalidNotation;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let (separator, is_roundtrip) = match (route.contains('>'), route.contains(" - ")) {
            (true, false) => (">", true),
            (false, _) => (" - ", false),
            (true, true) => return Err(InvalidNotation(route.to_owned())),
        };

        let stops: Vec<String> = route
            .split(separator)
            .map(|stop| stop.trim().to_owned())
            .collect();

        if stops.iter().any(String::is_empty) {
            return Err(InvalidNotation(route.to_owned()));
        }

        Ok(Self { stops, is_roundtrip })
    }
}

impl BusRecord {
    pub fn notation(&self) -> Result<RouteNotation, LoadError> {
        self.route
            .parse()
            .map_err(|source| LoadError::InvalidRoute {
                bus: self.name.to_owned(),
                source,
            })
    }
}

/// Raw catalogue contents as read from the input files.
#[derive(Debug, Default)]
pub struct Dataset {
    pub stops: Vec<StopRecord>,
    pub distances: Vec<DistanceRecord>,
    pub buses: Vec<BusRecord>,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

pub fn deserialize_from<T, R>(reader: R) -> Result<Vec<T>, LoadError>
where
    T: serde::de::DeserializeOwned,
    R: io::Read,
{
    let mut records = Vec::new();
    for record in reader_builder().from_reader(reader).deserialize() {
        records.push(record?);
    }
    Ok(records)
}

pub fn deserialize_into<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<Vec<T>, LoadError> {
    debug!("Reading {}", path.as_ref().display());
    deserialize_from(File::open(path)?)
}

impl Dataset {
    /// Fills a catalogue: stops first, then distances, then buses, so that
    /// every reference can resolve. Stops at the first error, leaving the
    /// catalogue partially filled; [`TransportCatalogue::try_from`] discards it.
    fn load_into(&self, catalogue: &mut TransportCatalogue) -> Result<(), LoadError> {
        for stop in &self.stops {
            catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
        }
        debug!("Loaded {} stops", self.stops.len());

        for distance in &self.distances {
            catalogue.add_stop_distance(&distance.from, &distance.to, distance.distance);
        }
        debug!("Loaded {} distances", self.distances.len());

        for bus in &self.buses {
            let notation = bus.notation()?;
            catalogue.add_bus(&bus.name, &notation.stops, notation.is_roundtrip)?;
        }
        debug!("Loaded {} buses", self.buses.len());

        Ok(())
    }
}

impl TryFrom<Dataset> for TransportCatalogue {
    type Error = LoadError;

    fn try_from(dataset: Dataset) -> Result<Self, Self::Error> {
        let mut catalogue = TransportCatalogue::new();
        dataset.load_into(&mut catalogue)?;
        Ok(catalogue)
    }
}

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use itertools::Itertools;
use log::{debug, warn};

use crate::{
    domain::*,
    error::{CatalogueError, Result},
    geo::{compute_distance, Coordinates},
};

/// In-memory registry of stops and bus routes.
///
/// Stops and buses are stored in append-only arenas and referenced everywhere
/// else through [`StopId`] and [`BusId`] handles.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    stopname_to_stop: HashMap<Arc<str>, StopId>,
    busname_to_bus: HashMap<Arc<str>, BusId>,
    stop_to_buses: HashMap<StopId, BTreeSet<Arc<str>>>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> Result<StopId> {
        if self.stopname_to_stop.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_owned()));
        }

        let id = StopId(self.stops.len());
        let name: Arc<str> = name.into();
        self.stops.push(Stop {
            name: Arc::clone(&name),
            coordinates,
        });
        self.stopname_to_stop.insert(name, id);

        Ok(id)
    }

    /// Records the measured distance from one stop to another.
    ///
    /// Ignored if either stop is unknown.
    pub fn add_stop_distance(&mut self, from: &str, to: &str, distance: u32) {
        match (self.stop_id(from), self.stop_id(to)) {
            (Some(from), Some(to)) => {
                self.distances.insert((from, to), distance);
            }
            _ => debug!("Ignoring distance {from:?} -> {to:?}: unknown stop"),
        }
    }

    /// Registers a bus. Stop names that do not resolve are dropped from the route.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId> {
        if self.busname_to_bus.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_owned()));
        }

        let name: Arc<str> = name.into();
        let stops: Vec<StopId> = stop_names
            .iter()
            .filter_map(|stop_name| {
                let stop_name: &str = stop_name.as_ref();
                let stop = self.stop_id(stop_name);
                if stop.is_none() {
                    warn!("Bus {name:?} refers to unknown stop {stop_name:?}, skipping it");
                }
                stop
            })
            .collect();

        for stop in &stops {
            self.stop_to_buses
                .entry(*stop)
                .or_default()
                .insert(Arc::clone(&name));
        }

        let id = BusId(self.buses.len());
        self.buses.push(Bus {
            name: Arc::clone(&name),
            stops,
            is_roundtrip,
        });
        self.busname_to_bus.insert(name, id);

        Ok(id)
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stopname_to_stop.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.busname_to_bus.get(name).copied()
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| self.bus(id))
    }

    pub fn has_stop(&self, name: &str) -> bool {
        self.stopname_to_stop.contains_key(name)
    }

    /// Handles are only ever issued by this catalogue, so they always resolve.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    pub fn bus_stops<'a>(&'a self, bus: &'a Bus) -> impl Iterator<Item = &'a Stop> + 'a {
        bus.stops.iter().map(|&id| self.stop(id))
    }

    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Names of the buses serving a stop, in lexicographic order.
    ///
    /// An unknown stop and a stop without buses both yield an empty list;
    /// use [`Self::has_stop`] to tell them apart.
    pub fn buses_for_stop(&self, name: &str) -> Vec<String> {
        self.stop_id(name)
            .and_then(|id| self.stop_to_buses.get(&id))
            .map(|buses| buses.iter().map(|bus| bus.to_string()).collect())
            .unwrap_or_default()
    }

    /// Real road distance between two stops.
    ///
    /// Falls back to the reverse measurement, then to the great-circle
    /// distance truncated to whole meters.
    pub fn stop_distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or_else(|| self.geo_distance(from, to) as u32)
    }

    fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        compute_distance(self.stop(from).coordinates, self.stop(to).coordinates)
    }

    /// Route statistics for a bus, or the zero-valued [`BusInfo`] if it is unknown.
    pub fn bus_info(&self, name: &str) -> BusInfo {
        let Some(bus) = self.find_bus(name) else {
            return BusInfo::default();
        };

        let (route_length, geo_route_length) = bus
            .edges()
            .into_iter()
            .fold((0.0, 0.0), |(real, geo), (from, to)| {
                (
                    real + f64::from(self.stop_distance(from, to)),
                    geo + self.geo_distance(from, to),
                )
            });

        BusInfo {
            stops_count: bus.stops_on_route(),
            unique_stops_count: bus.stops.iter().unique().count(),
            route_length,
            curvature: Curvature::new(route_length, geo_route_length),
        }
    }
}

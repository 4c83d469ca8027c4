use std::{fmt, sync::Arc};

use crate::geo::Coordinates;

/// Handle of a stop inside the catalogue's stop store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

/// Handle of a bus inside the catalogue's bus store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: Arc<str>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: Arc<str>,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Number of stop visits along the full traversal.
    pub fn stops_on_route(&self) -> usize {
        match (self.is_roundtrip, self.stops.len()) {
            (true, len) => len,
            (false, 0) => 0,
            (false, len) => len * 2 - 1,
        }
    }

    /// Directed edges in traversal order, including the way back for there-and-back routes.
    pub fn edges(&self) -> Vec<(StopId, StopId)> {
        let forward = self.stops.windows(2).map(|pair| (pair[0], pair[1]));

        if self.is_roundtrip {
            forward.collect()
        } else {
            let backward = self.stops.windows(2).rev().map(|pair| (pair[1], pair[0]));
            forward.chain(backward).collect()
        }
    }
}

/// Ratio of real route length to its great-circle length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curvature {
    Ratio(f64),
    /// The route has no geographic extent, so the ratio has no meaning.
    Undefined,
}

impl Curvature {
    pub fn new(route_length: f64, geo_route_length: f64) -> Self {
        let ratio = route_length / geo_route_length;
        if geo_route_length == 0.0 || !ratio.is_finite() {
            Curvature::Undefined
        } else {
            Curvature::Ratio(ratio)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Curvature::Ratio(ratio) => Some(ratio),
            Curvature::Undefined => None,
        }
    }
}

impl Default for Curvature {
    fn default() -> Self {
        Curvature::Ratio(0.0)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curvature::Ratio(ratio) => write!(f, "{}", significant(*ratio, 6)),
            Curvature::Undefined => write!(f, "undefined"),
        }
    }
}

/// Formats `value` with `digits` significant digits, dropping trailing zeros.
pub(crate) fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");

    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        formatted
    }
}

/// Summary statistics of a single bus route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BusInfo {
    pub stops_count: usize,
    pub unique_stops_count: usize,
    pub route_length: f64,
    pub curvature: Curvature,
}

use std::fmt;

use serde::Deserialize;

use crate::{
    catalogue::TransportCatalogue,
    domain::{significant, BusInfo},
    error::LoadError,
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Bus(String),
    Stop(String),
}

impl TryFrom<RequestRecord> for Request {
    type Error = LoadError;

    fn try_from(record: RequestRecord) -> Result<Self, Self::Error> {
        match record.kind.to_ascii_lowercase().as_str() {
            "bus" => Ok(Request::Bus(record.name)),
            "stop" => Ok(Request::Stop(record.name)),
            _ => Err(LoadError::UnknownRequest(record.kind)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Bus { name: String, info: Option<BusInfo> },
    Stop { name: String, buses: Option<Vec<String>> },
}

impl Request {
    pub fn answer(&self, catalogue: &TransportCatalogue) -> Response {
        match self {
            Request::Bus(name) => Response::Bus {
                name: name.to_owned(),
                info: catalogue
                    .find_bus(name)
                    .map(|_| catalogue.bus_info(name)),
            },
            Request::Stop(name) => Response::Stop {
                name: name.to_owned(),
                buses: catalogue
                    .has_stop(name)
                    .then(|| catalogue.buses_for_stop(name)),
            },
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Bus { name, info: None } => write!(f, "Bus {name}: not found"),
            Response::Bus {
                name,
                info: Some(info),
            } => write!(
                f,
                "Bus {name}: {} stops on route, {} unique stops, {} route length, {} curvature",
                info.stops_count,
                info.unique_stops_count,
                significant(info.route_length, 6),
                info.curvature,
            ),
            Response::Stop { name, buses: None } => write!(f, "Stop {name}: not found"),
            Response::Stop {
                name,
                buses: Some(buses),
            } if buses.is_empty() => write!(f, "Stop {name}: no buses"),
            Response::Stop {
                name,
                buses: Some(buses),
            } => write!(f, "Stop {name}: buses {}", buses.join(" ")),
        }
    }
}

use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::{
    error::LoadError,
    input::{deserialize_into, Dataset},
    report::{Request, RequestRecord},
};

/// Load stops, distances and bus routes from CSV files and answer queries about them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// CSV with columns `name,latitude,longitude`
    #[arg(long)]
    pub stops: PathBuf,

    /// CSV with columns `from,to,distance`
    #[arg(long)]
    pub distances: Option<PathBuf>,

    /// CSV with columns `name,route`, routes written as `A > B > A` or `A - B`
    #[arg(long)]
    pub buses: PathBuf,

    /// CSV with columns `kind,name`, kind is `bus` or `stop`
    #[arg(long)]
    pub requests: PathBuf,
}

impl Config {
    pub fn dataset(&self) -> Result<Dataset, LoadError> {
        let dataset = Dataset {
            stops: deserialize_into(&self.stops)?,
            distances: match &self.distances {
                Some(path) => deserialize_into(path)?,
                None => Vec::new(),
            },
            buses: deserialize_into(&self.buses)?,
        };
        debug!(
            "Read {} stops, {} distances, {} buses",
            dataset.stops.len(),
            dataset.distances.len(),
            dataset.buses.len()
        );
        Ok(dataset)
    }

    pub fn requests(&self) -> Result<Vec<Request>, LoadError> {
        deserialize_into::<RequestRecord>(&self.requests)?
            .into_iter()
            .map(Request::try_from)
            .collect()
    }
}

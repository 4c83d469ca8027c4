use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Stop {0:?} is already registered")]
    DuplicateStop(String),

    #[error("Bus {0:?} is already registered")]
    DuplicateBus(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Route {0:?} mixes \">\" and \"-\" separators or names an empty stop")]
pub struct InvalidNotation(pub String);

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("Bus {bus:?} has an unreadable route: {source}")]
    InvalidRoute { bus: String, source: InvalidNotation },

    #[error("Unknown request kind {0:?}, expected \"bus\" or \"stop\"")]
    UnknownRequest(String),
}

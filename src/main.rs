use clap::Parser;

use transport_catalogue::{config::Config, LoadError, TransportCatalogue};

fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), LoadError> {
    let catalogue = TransportCatalogue::try_from(config.dataset()?)?;
    log::info!(
        "Catalogue ready with {} stops and {} buses",
        catalogue.stop_count(),
        catalogue.bus_count()
    );

    for request in config.requests()? {
        println!("{}", request.answer(&catalogue));
    }

    Ok(())
}

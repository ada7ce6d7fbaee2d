use std::io;

use tracing::Level;

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => tracing::debug!("Logging initialised"),
        Err(e) => eprintln!("Failed to init logging. {e}"),
    }
}

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging; `debug` raises this crate's level to Debug while
/// dependencies stay at Info
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .with_module_level(env!("CARGO_CRATE_NAME"), log_level);

    if let Err(e) = logger.init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log_level
}

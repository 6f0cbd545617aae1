use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod report;
pub mod show;

fn initialise_logging(log_level: LevelFilter) {
    // Fails if a logger was already set, e.g. when running multiple commands in one process.
    TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();
}

use fwlog::{DEFAULT_LEVEL, LevelFilter, global_logger, setup_logger};
use fwlog_concat::add_two_strings;

fn main() {
    setup_logger(DEFAULT_LEVEL, "");
    let logger = global_logger(module_path!());
    logger.set_level(LevelFilter::Debug);

    add_two_strings(&logger, "yo", "hi");
}

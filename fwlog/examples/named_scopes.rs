use fwlog::{LevelFilter, global_logger, logger_config};

fn main() {
    let app = logger_config()
        .with_level(LevelFilter::Debug)
        .with_name("app")
        .install();
    fwlog::info!(app, "starting");

    let db = global_logger("app::db");
    db.set_level(LevelFilter::Warn);
    fwlog::info!(db, "connected"); // below the db threshold
    fwlog::warn!(db, "slow query");

    let http = global_logger("app.http");
    fwlog::debug!(http, "inherits the app threshold");

    // not under `app`, nothing is written
    fwlog::error!(global_logger("vendor"), "ignored");

    // facade records use their target as scope name
    log::info!(target: "app::facade", "through the log crate");
}

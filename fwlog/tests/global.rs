use fwlog::{LevelFilter, LogBuffer, global_logger, global_provider, logger_config, setup_logger};

fn level_of(line: &str) -> &str {
    line.split_whitespace().nth(2).unwrap()
}

// Process-wide state: kept in a single test so the steps run in order.
#[test]
fn test_install_is_last_writer_wins() {
    let handle = setup_logger(LevelFilter::Warn, "svc");
    assert_eq!(handle.name(), "svc");
    assert!(global_provider().is_some());
    assert_eq!(handle.level(), Some(LevelFilter::Warn));

    let first = LogBuffer::new();
    let handle = logger_config()
        .with_level(LevelFilter::Info)
        .with_name("svc")
        .with_buffer(first.clone())
        .with_color(false)
        .install();
    fwlog::debug!(handle, "below threshold");
    fwlog::info!(handle, "first setup");
    assert_eq!(first.lines().len(), 1);
    assert_eq!(level_of(&first.lines()[0]), "INFO");

    // same name through the global lookup, same scope
    let again = global_logger("svc");
    assert!(handle.same_scope(&again));

    // facade records are routed by target
    log::info!(target: "svc::db", "from the facade");
    log::info!(target: "elsewhere", "outside the scope");
    let lines = first.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with(" from the facade"));

    let second = LogBuffer::new();
    let replaced = logger_config()
        .with_level(LevelFilter::Error)
        .with_name("")
        .with_buffer(second.clone())
        .with_color(false)
        .install();
    assert_eq!(replaced.name(), "");

    // the old handle now goes through the new configuration
    fwlog::warn!(handle, "dropped by the new threshold");
    fwlog::error!(handle, "reaches the new handler");
    log::error!(target: "elsewhere", "root scope takes everything");
    assert_eq!(first.lines().len(), 2);
    let lines = second.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(level_of(&lines[0]), "ERROR");
    assert!(lines[0].ends_with(" reaches the new handler"));
    assert!(lines[1].ends_with(" root scope takes everything"));
}

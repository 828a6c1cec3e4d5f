use canon_domain::config::LoggingConfig;
use canon_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_logging_from_config_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        directory: Some(log_dir.clone()),
        json: true,
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config("canon-file-logging", &config)?;
    assert!(logger.guard().is_some());

    tracing::info!(set = "Role", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|line| line.contains("hello from integration test")).expect("event logged");
    assert!(line.starts_with('{'), "file sink should write JSON lines");
    assert!(line.contains(r#""set":"Role""#));

    Ok(())
}

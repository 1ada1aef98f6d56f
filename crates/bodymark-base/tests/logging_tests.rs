use bodymark_base::logging::{FileLogger, StdoutLogger, format_record, parse_level};
use log::{LevelFilter, Log};
use std::fs;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_format_record_contains_location_and_message() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("capture.rs"))
        .line(Some(42))
        .args(format_args!("frame dropped"))
        .build();

    let line = format_record(&record);
    assert!(line.contains("[WARN]"));
    assert!(line.contains("capture.rs:42"));
    assert!(line.ends_with("frame dropped"));
}

#[test]
fn test_stdout_logger_does_not_panic() {
    let logger = StdoutLogger;
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("test")
        .args(format_args!("hello"))
        .build();
    logger.log(&record);
    logger.flush();
}

#[test]
fn test_file_logger_writes_to_file() {
    let test_dir =
        std::env::temp_dir().join(format!("bodymark-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    log::set_max_level(LevelFilter::Trace);
    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(100))
        .args(format_args!("inference failed"))
        .build();
    logger.log(&record);
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&test_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().unwrap().path();
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("inference failed"));
    assert!(content.contains("test.rs:100"));

    fs::remove_dir_all(&test_dir).ok();
}

use std::fs;
use std::io;

use hour_stat::models::BucketKey;
use hour_stat::pipeline::analyze_file;
use hour_stat::Error;
use tempfile::tempdir;

#[test]
fn reports_hours_from_access_log() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access_log");
    fs::write(
        &log,
        "\
10.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET / HTTP/1.1\" 200 512
10.0.0.2 - - [10/Oct/2023:13:57:01 -0700] \"GET /a HTTP/1.1\" 200 64
this line carries no timestamp at all
10.0.0.3 - - [10/Oct/2023:14:02:10 -0700] \"POST /b HTTP/1.1\" 201 9
",
    )
    .unwrap();

    // Act
    let report = analyze_file(&log).unwrap();

    // Assert
    let ranked: Vec<(BucketKey, u64)> = report
        .ranked()
        .iter()
        .map(|entry| (entry.key.clone(), entry.count))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (BucketKey::from("10/Oct/2023:13"), 2),
            (BucketKey::from("10/Oct/2023:14"), 1),
        ]
    );
    assert_eq!(report.distinct_hours(), 2);
    assert_eq!(report.mean(), 1.5);
}

#[test]
fn rendered_report_lists_top_and_bottom_five() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access_log");
    let mut content = String::new();
    for hour in 0..7u32 {
        for _ in 0..(hour + 1) {
            content.push_str(&format!(
                "1.1.1.1 - - [01/Jan/2024:{hour:02}:15:00 +0000] \"GET / HTTP/1.1\" 200 1\n"
            ));
        }
    }
    fs::write(&log, content).unwrap();

    // Act
    let report = analyze_file(&log).unwrap();
    let mut out = Vec::new();
    report.render(&mut out, 5).unwrap();
    let text = String::from_utf8(out).unwrap();

    // Assert
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "The 5 most active hours on the server:");
    assert_eq!(lines[3], "01/Jan/2024:06 --- 7");
    assert_eq!(lines[7], "01/Jan/2024:02 --- 3");
    assert_eq!(lines[8], "The 5 least active hours:");
    assert_eq!(lines[11], "01/Jan/2024:04 --- 5");
    assert_eq!(lines[15], "01/Jan/2024:00 --- 1");
    assert_eq!(lines.last(), Some(&"Average accesses per hour: 4.00"));
}

#[test]
fn log_without_timestamps_is_empty_aggregate() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("access_log");
    fs::write(&log, "nothing\nto\nsee 32/Zzz/2024:10:00:00 +0000\n").unwrap();

    // Act
    let result = analyze_file(&log);

    // Assert
    assert!(matches!(result, Err(Error::EmptyAggregate)));
}

#[test]
fn empty_file_is_empty_aggregate() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("access_log");
    fs::write(&log, "").unwrap();

    assert!(matches!(analyze_file(&log), Err(Error::EmptyAggregate)));
}

#[test]
fn missing_file_is_source_unavailable() {
    // Arrange
    let dir = tempdir().unwrap();
    let log = dir.path().join("does_not_exist");

    // Act
    let result = analyze_file(&log);

    // Assert
    match result {
        Err(Error::SourceUnavailable { path, source }) => {
            assert_eq!(path, log);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

use klingon_clock::clock::{FixedClock, Sample, WallClock};
use klingon_clock::config::HeadlessFormat;
use klingon_clock::core::{ClockSnapshot, SnapshotOptions};
use klingon_clock::headless;
use klingon_clock::types::{CalendarDate, ClockReading};

fn fixed() -> FixedClock {
    FixedClock(Sample {
        reading: ClockReading::new(13, 0, 0, CalendarDate::new(5, 17, 9, 2026)),
        epoch_ms: 0,
    })
}

#[test]
fn headless_json_matches_snapshot_fields() {
    let sample = fixed().sample();
    let opts = SnapshotOptions {
        owner: "Kahless".to_string(),
    };
    let snap = ClockSnapshot::from_reading(&sample.reading, &opts);
    let out = headless::render(&snap, HeadlessFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["time"], "wa' wej:pagh pagh:pagh pagh");
    assert_eq!(v["date"], "ghInjaj, wa'maH Soch jar wa'maH cha' pagh cha' jav");
    assert_eq!(v["plain_time"], "13:00:00");
    assert!(v["footer"].as_str().unwrap().contains("Kahless"));
    assert!((v["hands"]["hour"].as_f64().unwrap() - 30.0).abs() < 1e-6);
}

#[test]
fn headless_text_is_single_line() {
    let sample = fixed().sample();
    let snap = ClockSnapshot::from_reading(&sample.reading, &SnapshotOptions::default());
    let out = headless::render(&snap, HeadlessFormat::Text).unwrap();
    assert!(!out.contains('\n'));
    assert!(out.starts_with("wa' wej:"));
}

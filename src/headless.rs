//! One-shot output for scripts and status bars.

use anyhow::Result;

use crate::config::HeadlessFormat;
use crate::core::ClockSnapshot;

/// Render a snapshot for headless mode.
///
/// `Text` prints the Klingon time, the date, and the plain time on one
/// line; `Json` serializes the whole snapshot.
pub fn render(snap: &ClockSnapshot, format: HeadlessFormat) -> Result<String> {
    match format {
        HeadlessFormat::Text => Ok(format!(
            "{} | {} ({})",
            snap.time, snap.date, snap.plain_time
        )),
        HeadlessFormat::Json => Ok(serde_json::to_string(snap)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SnapshotOptions;
    use crate::types::{CalendarDate, ClockReading};

    fn snap() -> ClockSnapshot {
        let reading = ClockReading::new(7, 5, 9, CalendarDate::new(0, 15, 0, 2024));
        ClockSnapshot::from_reading(&reading, &SnapshotOptions::default())
    }

    #[test]
    fn text_line_has_both_scripts() {
        let line = render(&snap(), HeadlessFormat::Text).unwrap();
        assert_eq!(
            line,
            "Soch:pagh vagh:pagh Hut | DaSjaj, wa'maH vagh jar wa' cha' pagh cha' loS (07:05:09)"
        );
    }

    #[test]
    fn json_is_one_object() {
        let out = render(&snap(), HeadlessFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["plain_time"], "07:05:09");
        assert!(!out.contains('\n'));
    }
}

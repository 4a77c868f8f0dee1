//! Time-bucketed aggregation of scanned file entries.
//!
//! Entries fold into a six-level tree keyed by the calendar fields of the
//! file's modification time (year, month, day, hour, minute), then by the
//! detected type. Levels exist only for combinations actually observed;
//! nothing is pre-populated or pruned.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::walker::FileEntry;

/// Accumulated totals for one (year, month, day, hour, minute, type) bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub size: u64,
    pub files: u64,
}

type TypeMap = BTreeMap<String, Bucket>;
type MinuteMap = BTreeMap<u32, TypeMap>;
type HourMap = BTreeMap<u32, MinuteMap>;
type DayMap = BTreeMap<u32, HourMap>;
type MonthMap = BTreeMap<u32, DayMap>;

/// Nested year -> month -> day -> hour -> minute -> type tree.
///
/// Serializes directly to the report's nested object form; integer keys
/// become unpadded JSON strings, and map ordering keeps output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregateTree(BTreeMap<i32, MonthMap>);

impl AggregateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert one file into its bucket, creating levels on first use.
    pub fn record(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        kind: &str,
        size: u64,
    ) {
        let bucket = self
            .0
            .entry(year)
            .or_default()
            .entry(month)
            .or_default()
            .entry(day)
            .or_default()
            .entry(hour)
            .or_default()
            .entry(minute)
            .or_default()
            .entry(kind.to_string())
            .or_default();
        bucket.files += 1;
        bucket.size += size;
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of sizes and counts over every bucket in the tree.
    pub fn totals(&self) -> Bucket {
        let mut total = Bucket::default();
        for months in self.0.values() {
            for days in months.values() {
                for hours in days.values() {
                    for minutes in hours.values() {
                        for kinds in minutes.values() {
                            for bucket in kinds.values() {
                                total.size += bucket.size;
                                total.files += bucket.files;
                            }
                        }
                    }
                }
            }
        }
        total
    }
}

/// Fold a scan's entry list into its aggregation tree.
///
/// Pure: no failure modes, and folding the same list twice produces equal
/// trees. Seconds and finer precision of the timestamp are discarded.
pub fn aggregate(entries: &[FileEntry]) -> AggregateTree {
    let mut tree = AggregateTree::new();
    for entry in entries {
        let ts = &entry.modified;
        tree.record(
            ts.year(),
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute(),
            &entry.kind,
            entry.size,
        );
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn entry_at(
        (year, month, day): (i32, u32, u32),
        (hour, minute, second): (u32, u32, u32),
        kind: &str,
        size: u64,
    ) -> FileEntry {
        FileEntry {
            name: "file".to_string(),
            dir: PathBuf::from("/scan"),
            extension: "bin".to_string(),
            kind: kind.to_string(),
            size,
            modified: Local
                .with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap(),
            mode: 0o644,
            is_dir: false,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_tree() {
        let tree = aggregate(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.totals(), Bucket::default());
    }

    #[test]
    fn test_single_file_creates_one_bucket() {
        let tree = aggregate(&[entry_at((2023, 5, 17), (14, 30, 12), "image", 1024)]);

        let json = serde_json::to_value(&tree).unwrap();
        let bucket = &json["2023"]["5"]["17"]["14"]["30"]["image"];
        assert_eq!(bucket["Files"], 1);
        assert_eq!(bucket["Size"], 1024);
    }

    #[test]
    fn test_same_bucket_accumulates() {
        let tree = aggregate(&[
            entry_at((2023, 5, 17), (14, 30, 1), "image", 100),
            entry_at((2023, 5, 17), (14, 30, 59), "image", 250),
        ]);

        let json = serde_json::to_value(&tree).unwrap();
        let bucket = &json["2023"]["5"]["17"]["14"]["30"]["image"];
        assert_eq!(bucket["Files"], 2);
        assert_eq!(bucket["Size"], 350);
    }

    #[test]
    fn test_seconds_are_discarded() {
        // Same minute, different seconds: one bucket.
        let tree = aggregate(&[
            entry_at((2023, 5, 17), (14, 30, 0), "unknown", 1),
            entry_at((2023, 5, 17), (14, 30, 45), "unknown", 1),
        ]);
        assert_eq!(tree.totals(), Bucket { size: 2, files: 2 });

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["2023"]["5"]["17"]["14"]["30"]["unknown"]["Files"], 2);
    }

    #[test]
    fn test_different_minutes_split_buckets() {
        let tree = aggregate(&[
            entry_at((2023, 5, 17), (14, 30, 0), "image", 10),
            entry_at((2023, 5, 17), (14, 31, 0), "image", 20),
        ]);

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["2023"]["5"]["17"]["14"]["30"]["image"]["Size"], 10);
        assert_eq!(json["2023"]["5"]["17"]["14"]["31"]["image"]["Size"], 20);
    }

    #[test]
    fn test_different_types_split_buckets_within_a_minute() {
        let tree = aggregate(&[
            entry_at((2023, 5, 17), (14, 30, 0), "image", 10),
            entry_at((2023, 5, 17), (14, 30, 0), "unknown", 20),
        ]);

        let json = serde_json::to_value(&tree).unwrap();
        let minute = &json["2023"]["5"]["17"]["14"]["30"];
        assert_eq!(minute["image"]["Files"], 1);
        assert_eq!(minute["unknown"]["Files"], 1);
    }

    #[test]
    fn test_levels_are_lazy() {
        let tree = aggregate(&[entry_at((2023, 5, 17), (14, 30, 0), "image", 1)]);

        let json = serde_json::to_value(&tree).unwrap();
        // Exactly one key at every level: nothing is pre-populated.
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["2023"].as_object().unwrap().len(), 1);
        assert_eq!(json["2023"]["5"].as_object().unwrap().len(), 1);
        assert_eq!(json["2023"]["5"]["17"].as_object().unwrap().len(), 1);
        assert_eq!(json["2023"]["5"]["17"]["14"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entries = vec![
            entry_at((2022, 12, 31), (23, 59, 59), "video", 4096),
            entry_at((2023, 1, 1), (0, 0, 1), "unknown", 7),
            entry_at((2023, 1, 1), (0, 0, 30), "unknown", 9),
        ];

        let first = aggregate(&entries);
        let second = aggregate(&entries);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_totals_match_input_sums() {
        let entries = vec![
            entry_at((2021, 2, 3), (4, 5, 6), "image", 100),
            entry_at((2021, 2, 3), (4, 5, 7), "image", 200),
            entry_at((2024, 8, 9), (10, 11, 12), "audio", 300),
        ];

        let totals = aggregate(&entries).totals();
        assert_eq!(totals.files, 3);
        assert_eq!(totals.size, 600);
    }
}

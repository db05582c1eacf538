#![allow(dead_code)]

use stack_chart::core::{StackDataSet, StackEntry, StackItem, StackUnit};

/// Four entries at x = 0..=3 covering the common stack shapes.
pub fn sample_set() -> StackDataSet {
    let mut entries = Vec::new();
    for i in 0..4 {
        let x = f64::from(i);
        let entry = match i {
            0 => StackEntry::with_unit(
                x,
                8.0,
                16.0,
                StackUnit::with_item(9.0, 15.0, StackItem::new(x, 10.0, 14.0)),
            ),
            1 => StackEntry::with_unit(
                x,
                8.5,
                15.64,
                StackUnit::with_items(
                    9.0,
                    15.23,
                    vec![
                        StackItem::new(x, 9.333, 10.0),
                        StackItem::new(x, 10.33333, 12.3),
                        StackItem::new(x, 13.3, 14.2),
                    ],
                ),
            ),
            2 => {
                let morning = StackUnit::with_items(
                    8.0,
                    12.0,
                    vec![
                        StackItem::new(x, 8.1, 8.75),
                        StackItem::new(x, 9.25, 10.3),
                        StackItem::new(x, 10.5, 11.333),
                    ],
                );
                let afternoon = StackUnit::with_items(
                    13.0,
                    17.0,
                    vec![
                        StackItem::new(x, 13.0, 14.1),
                        StackItem::new(x, 15.25, 16.3),
                        StackItem::new(x, 16.5, 16.8),
                    ],
                );
                StackEntry::with_units(x, 8.0, 17.0, vec![morning, afternoon])
            }
            _ => StackEntry::with_unit(
                x,
                10.0,
                13.0,
                StackUnit::with_items(
                    8.0,
                    16.25,
                    vec![StackItem::new(x, 9.125, 11.3), StackItem::new(x, 12.25, 15.9)],
                ),
            ),
        };
        entries.push(entry);
    }
    StackDataSet::with_entries("sample", 0.0, 20.0, entries)
}

/// Entry with one unit `[9, 15]` holding items `[9.3, 10]`, `[10.3, 12.3]`
/// and `[13.3, 14.2]`.
pub fn drill_down_entry(x: f64) -> StackEntry {
    let unit = StackUnit::with_items(
        9.0,
        15.0,
        vec![
            StackItem::new(x, 9.3, 10.0),
            StackItem::new(x, 10.3, 12.3),
            StackItem::new(x, 13.3, 14.2),
        ],
    );
    StackEntry::with_unit(x, 8.5, 15.5, unit)
}

use proptest::prelude::*;
use stack_chart::core::{
    Interval, Stack, StackEntry, StackItem, StackUnit, index_containing, index_containing_linear,
};

fn gapped_items() -> impl Strategy<Value = Vec<StackItem>> {
    prop::sample::select(vec![0usize, 1, 2, 10, 100])
        .prop_flat_map(|count| {
            (
                -50.0f64..50.0,
                prop::collection::vec((0.01f64..5.0, 0.0f64..5.0), count),
            )
        })
        .prop_map(|(start, spans)| {
            let mut cursor = start;
            spans
                .into_iter()
                .map(|(gap, width)| {
                    let min = cursor + gap;
                    let max = min + width;
                    cursor = max;
                    StackItem::new(0.0, min, max)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn binary_search_matches_linear_scan(
        items in gapped_items(),
        probes in prop::collection::vec(-80.0f64..1_100.0, 1..32)
    ) {
        for value in probes {
            prop_assert_eq!(
                index_containing(&items, value),
                index_containing_linear(&items, value)
            );
        }

        for (index, item) in items.iter().enumerate() {
            prop_assert_eq!(index_containing(&items, item.min()), Some(index));
            prop_assert_eq!(index_containing(&items, item.max()), Some(index));
            prop_assert_eq!(index_containing(&items, item.value()), Some(index));
        }
    }

    #[test]
    fn constructors_normalize_bounds(
        a in -1_000.0f64..1_000.0,
        b in -1_000.0f64..1_000.0,
        x in -10.0f64..10.0
    ) {
        let item = StackItem::new(x, a, b);
        prop_assert_eq!(item.min(), a.min(b));
        prop_assert_eq!(item.max(), a.max(b));

        let unit = StackUnit::new(a, b);
        prop_assert!(unit.min() <= unit.max());

        let entry = StackEntry::new(x, a, b);
        prop_assert_eq!(entry.min(), a.min(b));
        prop_assert_eq!(entry.max(), a.max(b));
    }

    #[test]
    fn add_all_keeps_exactly_the_fitting_items(
        bounds in prop::collection::vec((-5.0f64..15.0, -5.0f64..15.0), 0..24)
    ) {
        let candidates: Vec<StackItem> = bounds
            .iter()
            .map(|&(a, b)| StackItem::new(1.0, a, b))
            .collect();
        let fitting: Vec<StackItem> = candidates
            .iter()
            .filter(|item| item.min() >= 0.0 && item.max() <= 10.0)
            .cloned()
            .collect();

        let mut unit = StackUnit::new(0.0, 10.0);
        let all_added = unit.add_all(candidates.clone());

        prop_assert_eq!(all_added, fitting.len() == candidates.len());
        prop_assert_eq!(unit.items(), fitting.as_slice());
        prop_assert!(unit.lowest() >= 0.0);
        prop_assert!(unit.highest() <= 10.0);
    }
}

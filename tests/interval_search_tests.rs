use stack_chart::core::{
    Interval, SearchStrategy, StackItem, find_containing, index_containing,
    index_containing_linear, is_sorted_disjoint,
};

fn items(bounds: &[(f64, f64)]) -> Vec<StackItem> {
    bounds
        .iter()
        .map(|&(min, max)| StackItem::new(0.0, min, max))
        .collect()
}

#[test]
fn empty_sequence_never_matches() {
    let nodes: Vec<StackItem> = Vec::new();
    assert_eq!(index_containing(&nodes, 0.0), None);
    assert_eq!(find_containing(&nodes, 0.0, SearchStrategy::Auto), None);
}

#[test]
fn single_node_matches_only_inside() {
    let nodes = items(&[(2.0, 4.0)]);
    assert_eq!(index_containing(&nodes, 2.0), Some(0));
    assert_eq!(index_containing(&nodes, 4.0), Some(0));
    assert_eq!(index_containing(&nodes, 4.01), None);
    assert_eq!(index_containing(&nodes, 1.99), None);
}

#[test]
fn values_outside_first_and_last_bounds_miss() {
    let nodes = items(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    assert_eq!(index_containing(&nodes, 0.5), None);
    assert_eq!(index_containing(&nodes, 6.5), None);
}

#[test]
fn gaps_between_nodes_miss() {
    let nodes = items(&[(9.3, 10.0), (10.3, 12.3), (13.3, 14.2)]);
    assert_eq!(index_containing(&nodes, 9.5), Some(0));
    assert_eq!(index_containing(&nodes, 10.15), None);
    assert_eq!(index_containing(&nodes, 11.0), Some(1));
    assert_eq!(index_containing(&nodes, 12.8), None);
    assert_eq!(index_containing(&nodes, 14.2), Some(2));
}

#[test]
fn every_node_is_found_in_longer_sequences() {
    let nodes: Vec<StackItem> = (0..37)
        .map(|i| {
            let base = f64::from(i) * 3.0;
            StackItem::new(0.0, base, base + 2.0)
        })
        .collect();

    for (index, node) in nodes.iter().enumerate() {
        assert_eq!(index_containing(&nodes, node.min()), Some(index));
        assert_eq!(index_containing(&nodes, node.max()), Some(index));
        assert_eq!(index_containing(&nodes, node.max() + 0.5), None);
    }
}

#[test]
fn overlap_results_depend_on_strategy() {
    let nodes = items(&[(33.0, 60.0), (50.0, 75.0)]);
    assert!(!is_sorted_disjoint(&nodes));

    assert_eq!(find_containing(&nodes, 55.0, SearchStrategy::Binary), Some(1));
    assert_eq!(find_containing(&nodes, 55.0, SearchStrategy::Linear), Some(0));
    assert_eq!(find_containing(&nodes, 55.0, SearchStrategy::Auto), Some(0));
    assert_eq!(find_containing(&nodes, 40.0, SearchStrategy::Binary), Some(0));
}

#[test]
fn auto_uses_binary_results_on_disjoint_input() {
    let nodes = items(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    assert!(is_sorted_disjoint(&nodes));
    for value in [0.0, 1.5, 2.5, 3.0, 5.9, 7.0] {
        assert_eq!(
            find_containing(&nodes, value, SearchStrategy::Auto),
            index_containing(&nodes, value)
        );
    }
}

#[test]
fn touching_endpoints_are_not_disjoint() {
    let nodes = items(&[(1.0, 2.0), (2.0, 3.0)]);
    assert!(!is_sorted_disjoint(&nodes));
    assert_eq!(index_containing_linear(&nodes, 2.0), Some(0));
}

#[test]
fn unsorted_input_is_detected() {
    let nodes = items(&[(5.0, 6.0), (1.0, 2.0)]);
    assert!(!is_sorted_disjoint(&nodes));
    assert_eq!(find_containing(&nodes, 1.5, SearchStrategy::Auto), Some(1));
}

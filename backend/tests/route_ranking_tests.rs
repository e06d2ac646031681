//! Route ranking tests
//!
//! The ranker is a stable sort by priority descending: ties keep their
//! input order and missing priorities default to 0.

use proptest::prelude::*;
use shared::{rank_stops, DeliveryStop};

fn stop(id: &str, priority: Option<u8>) -> DeliveryStop {
    DeliveryStop {
        id: id.to_string(),
        name: format!("Stop {}", id),
        address: format!("{} Hudson St", id),
        time_window: None,
        priority,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_priority_five_first_and_ties_keep_input_order() {
    // Priorities [3, 3, 1, 5]: the 5 leads, the two 3s keep relative order
    let stops = vec![
        stop("first-three", Some(3)),
        stop("second-three", Some(3)),
        stop("one", Some(1)),
        stop("five", Some(5)),
    ];

    let ranked = rank_stops(&stops);
    let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["five", "first-three", "second-three", "one"]);
}

#[test]
fn test_all_missing_priorities_preserve_input_order() {
    let stops = vec![stop("a", None), stop("b", None), stop("c", None)];
    let ranked = rank_stops(&stops);
    let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_missing_priority_sorts_with_zero() {
    let stops = vec![stop("unset", None), stop("zero", Some(0)), stop("top", Some(9))];
    let ranked = rank_stops(&stops);
    let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "unset", "zero"]);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Ranking is a permutation with non-increasing priorities
    #[test]
    fn prop_ranked_priorities_never_increase(
        priorities in proptest::collection::vec(proptest::option::of(0u8..=10), 1..20)
    ) {
        let stops: Vec<DeliveryStop> = priorities
            .iter()
            .enumerate()
            .map(|(i, p)| stop(&i.to_string(), *p))
            .collect();

        let ranked = rank_stops(&stops);
        prop_assert_eq!(ranked.len(), stops.len());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].priority_or_default() >= pair[1].priority_or_default());
        }
    }

    /// Stops with equal priority keep their input order (stability)
    #[test]
    fn prop_ties_preserve_input_order(
        priorities in proptest::collection::vec(0u8..=3, 2..20)
    ) {
        // Ids encode input position, so order within a tie is checkable
        let stops: Vec<DeliveryStop> = priorities
            .iter()
            .enumerate()
            .map(|(i, p)| stop(&i.to_string(), Some(*p)))
            .collect();

        let ranked = rank_stops(&stops);

        for pair in ranked.windows(2) {
            if pair[0].priority_or_default() == pair[1].priority_or_default() {
                let left: usize = pair[0].id.parse().unwrap();
                let right: usize = pair[1].id.parse().unwrap();
                prop_assert!(left < right);
            }
        }
    }
}

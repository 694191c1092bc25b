//! Property-based tests for the roster operations
//!
//! Strategies generate in-range records; properties check the permutation,
//! ordering and stability contracts over whole rosters rather than
//! hand-picked fixtures.

use proptest::prelude::*;

use super::ordering::selection_sort;
use super::roster::{
    ordinal_ignore_case, search_by_name, sort_by_age, sort_by_goal_contribution, sort_by_name,
    sort_by_nationality,
};
use crate::models::TransferRecord;

fn position_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("GK".to_string()),
        Just("DC".to_string()),
        Just("DM".to_string()),
        Just("MC".to_string()),
        Just("AMC".to_string()),
        Just("ST".to_string()),
    ]
}

// Single-case-class names keep case-sensitive and case-insensitive order
// identical, which the search properties rely on
fn record_strategy() -> impl Strategy<Value = TransferRecord> {
    (
        1u32..10_000,
        "[A-Z][a-z]{0,11}",
        position_strategy(),
        "[A-Z][a-z]{0,11}",
        10u8..=40,
        0.0f64..=1_000_000_000.0,
        1u8..=96,
        0u16..=1500,
    )
        .prop_map(
            |(
                player_id,
                name,
                position,
                nationality,
                age,
                market_value,
                contract_months,
                goal_contribution,
            )| TransferRecord {
                player_id,
                name,
                position,
                nationality,
                age,
                market_value,
                contract_months,
                goal_contribution,
            },
        )
}

fn roster_strategy() -> impl Strategy<Value = Vec<TransferRecord>> {
    proptest::collection::vec(record_strategy(), 0..40)
}

fn is_permutation(a: &[TransferRecord], b: &[TransferRecord]) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|r| a.iter().filter(|x| *x == r).count() == b.iter().filter(|x| *x == r).count())
}

proptest! {
    #[test]
    fn sort_by_age_is_stable_ascending_permutation(roster in roster_strategy()) {
        let sorted = sort_by_age(&roster);

        prop_assert!(is_permutation(&roster, &sorted));
        prop_assert!(sorted.windows(2).all(|p| p[0].age <= p[1].age));

        // Stability: each equal-age group keeps its exact input sequence
        for age in roster.iter().map(|r| r.age) {
            let before: Vec<&TransferRecord> = roster.iter().filter(|r| r.age == age).collect();
            let after: Vec<&TransferRecord> = sorted.iter().filter(|r| r.age == age).collect();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn in_place_sorts_are_ascending_permutations(roster in roster_strategy()) {
        let mut by_name = roster.clone();
        sort_by_name(&mut by_name);
        prop_assert!(is_permutation(&roster, &by_name));
        prop_assert!(by_name.windows(2).all(|p| p[0].name <= p[1].name));

        let mut by_nationality = roster.clone();
        sort_by_nationality(&mut by_nationality);
        prop_assert!(is_permutation(&roster, &by_nationality));
        prop_assert!(by_nationality
            .windows(2)
            .all(|p| p[0].nationality <= p[1].nationality));

        let mut by_goals = roster.clone();
        sort_by_goal_contribution(&mut by_goals);
        prop_assert!(is_permutation(&roster, &by_goals));
        prop_assert!(by_goals
            .windows(2)
            .all(|p| p[0].goal_contribution <= p[1].goal_contribution));

        // The insertion sort is the stable one of the in-place pair
        for goals in roster.iter().map(|r| r.goal_contribution) {
            let before: Vec<&TransferRecord> =
                roster.iter().filter(|r| r.goal_contribution == goals).collect();
            let after: Vec<&TransferRecord> =
                by_goals.iter().filter(|r| r.goal_contribution == goals).collect();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn sorting_twice_matches_sorting_once(roster in roster_strategy()) {
        let once = sort_by_age(&roster);
        let twice = sort_by_age(&once);
        prop_assert_eq!(&once, &twice);

        let mut named = roster.clone();
        sort_by_name(&mut named);
        let after_first = named.clone();
        sort_by_name(&mut named);
        prop_assert_eq!(&named, &after_first);

        let mut goals = roster.clone();
        sort_by_goal_contribution(&mut goals);
        let after_first = goals.clone();
        sort_by_goal_contribution(&mut goals);
        prop_assert_eq!(&goals, &after_first);
    }

    #[test]
    fn search_finds_every_present_name(roster in roster_strategy()) {
        let mut sorted = roster;
        // Case-insensitive order establishes the search precondition
        selection_sort(&mut sorted, |a: &TransferRecord, b: &TransferRecord| {
            ordinal_ignore_case(&a.name, &b.name)
        });

        for record in &sorted {
            let target = record.name.to_uppercase();
            let index = search_by_name(&sorted, &target);
            prop_assert!(index.is_some(), "present name {} must be found", record.name);
            let hit = &sorted[index.unwrap()];
            prop_assert_eq!(
                ordinal_ignore_case(&hit.name, &record.name),
                std::cmp::Ordering::Equal
            );
        }
    }

    #[test]
    fn search_misses_absent_names(roster in roster_strategy()) {
        let mut sorted = roster;
        selection_sort(&mut sorted, |a: &TransferRecord, b: &TransferRecord| {
            ordinal_ignore_case(&a.name, &b.name)
        });

        // The name pattern never generates digits, so this target is absent
        prop_assert_eq!(search_by_name(&sorted, "Absent0"), None);
    }
}

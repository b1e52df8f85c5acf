//! Group aggregation.
//!
//! Derives the per-group statistics shown in the groups table from the
//! participant snapshot.

use crate::categories::CATEGORIES;
use crate::models::{Group, GroupSeed, Participant};
use tracing::debug;

/// One seed per category of the enumeration, in enumeration order.
pub fn default_seeds() -> Vec<GroupSeed> {
    CATEGORIES
        .iter()
        .map(|entry| GroupSeed {
            group_name: entry.label.to_string(),
        })
        .collect()
}

/// Compute the aggregates of a single group.
pub fn aggregate_group(participants: &[Participant], group_name: &str) -> Group {
    let members: Vec<&Participant> = participants
        .iter()
        .filter(|p| p.belongs_to(group_name))
        .collect();

    if members.is_empty() {
        return Group::empty(group_name);
    }

    let number_of_users = members.len();
    let starting_amount = members.iter().map(|p| p.starting_amount).sum();
    let total_profit_usd = members.iter().map(|p| p.profit_usd).sum();
    let percentage_sum: f64 = members.iter().map(|p| p.profit_percentage).sum();

    Group {
        group_name: group_name.to_string(),
        number_of_users,
        starting_amount,
        total_profit_usd,
        average_profit_percentage: percentage_sum / number_of_users as f64,
    }
}

/// Aggregate every seeded group.
///
/// Falls back to the full category enumeration when `seeds` is empty.
pub fn aggregate_groups(participants: &[Participant], seeds: &[GroupSeed]) -> Vec<Group> {
    let fallback;
    let seeds: &[GroupSeed] = if seeds.is_empty() {
        fallback = default_seeds();
        fallback.as_slice()
    } else {
        seeds
    };

    let groups: Vec<Group> = seeds
        .iter()
        .map(|seed| aggregate_group(participants, &seed.group_name))
        .collect();

    debug!(
        "Aggregated {} groups over {} participants",
        groups.len(),
        participants.len()
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{Category, CATEGORY_COUNT};

    fn create_test_participant(
        address: &str,
        categories: Vec<Category>,
        starting_amount: f64,
        profit_usd: f64,
        profit_percentage: f64,
    ) -> Participant {
        Participant {
            wallet_address: address.to_string(),
            ens_name: None,
            categories,
            starting_amount,
            current_value: starting_amount + profit_usd,
            profit_usd,
            profit_percentage,
        }
    }

    fn sample() -> Vec<Participant> {
        vec![
            create_test_participant(
                "0x1",
                vec![Category::Citizens, Category::Top100Delegate],
                1000.0,
                200.0,
                20.0,
            ),
            create_test_participant("0x2", vec![Category::Citizens], 500.0, -50.0, -10.0),
            create_test_participant("0x3", vec![Category::UnaffiliatedUser], 100.0, 5.0, 5.0),
        ]
    }

    #[test]
    fn test_aggregate_group() {
        let group = aggregate_group(&sample(), "Citizens");

        assert_eq!(group.number_of_users, 2);
        assert_eq!(group.starting_amount, 1500.0);
        assert_eq!(group.total_profit_usd, 150.0);
        assert_eq!(group.average_profit_percentage, 5.0);
    }

    #[test]
    fn test_empty_group_is_zero() {
        let group = aggregate_group(&sample(), "Truemarket Attesters");

        assert_eq!(group, Group::empty("Truemarket Attesters"));
        assert_eq!(group.average_profit_percentage, 0.0);
    }

    #[test]
    fn test_member_counts_match_membership() {
        let participants = sample();
        let groups = aggregate_groups(&participants, &[]);

        assert_eq!(groups.len(), CATEGORY_COUNT);
        for group in &groups {
            let expected = participants
                .iter()
                .filter(|p| p.categories.iter().any(|c| c.label() == group.group_name))
                .count();
            assert_eq!(group.number_of_users, expected);
            if group.number_of_users == 0 {
                assert_eq!(group.average_profit_percentage, 0.0);
            }
        }
    }

    #[test]
    fn test_seeds_define_order() {
        let seeds = vec![
            GroupSeed {
                group_name: "Unaffiliated User".to_string(),
            },
            GroupSeed {
                group_name: "Citizens".to_string(),
            },
        ];

        let groups = aggregate_groups(&sample(), &seeds);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_name, "Unaffiliated User");
        assert_eq!(groups[0].number_of_users, 1);
        assert_eq!(groups[1].group_name, "Citizens");
    }

    #[test]
    fn test_aggregation_ignores_participant_order() {
        let participants = sample();
        let mut reversed = participants.clone();
        reversed.reverse();

        assert_eq!(
            aggregate_groups(&participants, &[]),
            aggregate_groups(&reversed, &[])
        );
    }
}

//! User actions: header clicks and pagination buttons.
//!
//! Grammar:
//!   sort:<key>         activate a participants-table header
//!   group-sort:<key>   activate a groups-table header
//!   page:<first|prev|next|last|N>

use crate::analysis::{SortKey, Table};
use crate::error::LeaderboardError;
use crate::view::pagination::PageNav;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Sort { table: Table, key: SortKey },
    Page(PageNav),
}

impl FromStr for PageNav {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(PageNav::First),
            "prev" | "previous" => Ok(PageNav::Prev),
            "next" => Ok(PageNav::Next),
            "last" => Ok(PageNav::Last),
            other => other
                .parse::<usize>()
                .map(PageNav::Number)
                .map_err(|_| format!("'{}' is not a page", other)),
        }
    }
}

impl FromStr for Action {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: String| LeaderboardError::InvalidAction {
            input: input.to_string(),
            reason,
        };

        let (verb, arg) = input
            .split_once(':')
            .ok_or_else(|| invalid("expected <verb>:<argument>".to_string()))?;
        let arg = arg.trim();

        let table = match verb.trim() {
            "sort" => Table::Participants,
            "group-sort" => Table::Groups,
            "page" => return arg.parse::<PageNav>().map(Action::Page).map_err(invalid),
            other => return Err(invalid(format!("unknown verb '{}'", other))),
        };

        let key: SortKey = arg.parse()?;
        if !key.belongs_to(table) {
            return Err(LeaderboardError::KeyNotInTable { key, table });
        }

        Ok(Action::Sort { table, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_actions() {
        assert_eq!(
            "sort:profitPercentage".parse::<Action>().unwrap(),
            Action::Sort {
                table: Table::Participants,
                key: SortKey::ProfitPercentage
            }
        );
        assert_eq!(
            "group-sort: numberOfUsers".parse::<Action>().unwrap(),
            Action::Sort {
                table: Table::Groups,
                key: SortKey::NumberOfUsers
            }
        );
    }

    #[test]
    fn test_parse_page_actions() {
        assert_eq!(
            "page:next".parse::<Action>().unwrap(),
            Action::Page(PageNav::Next)
        );
        assert_eq!(
            "page:3".parse::<Action>().unwrap(),
            Action::Page(PageNav::Number(3))
        );
        assert!("page:sideways".parse::<Action>().is_err());
    }

    #[test]
    fn test_rejects_key_from_other_table() {
        let err = "sort:numberOfUsers".parse::<Action>().unwrap_err();
        assert!(matches!(err, LeaderboardError::KeyNotInTable { .. }));

        let err = "group-sort:categories".parse::<Action>().unwrap_err();
        assert!(err.to_string().contains("groups"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!("sort".parse::<Action>().is_err());
        assert!("jump:1".parse::<Action>().is_err());
        assert!(matches!(
            "sort:bogus".parse::<Action>(),
            Err(LeaderboardError::UnknownSortKey(_))
        ));
    }
}

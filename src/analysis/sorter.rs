//! Column sorting for the leaderboard tables.
//!
//! Sorting is a pure function of the records, the key, the direction and
//! the category rotation index. The toggle state that picks the direction
//! lives in [`SortState`].

use crate::categories::{Category, CATEGORY_COUNT};
use crate::error::LeaderboardError;
use crate::models::{Group, Participant};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The two leaderboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Participants,
    Groups,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Participants => write!(f, "participants"),
            Table::Groups => write!(f, "groups"),
        }
    }
}

/// A sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    EnsName,
    GroupName,
    Categories,
    StartingAmount,
    CurrentValue,
    #[serde(rename = "profitUSD")]
    ProfitUsd,
    ProfitPercentage,
    NumberOfUsers,
    #[serde(rename = "totalProfitUSD")]
    TotalProfitUsd,
    AverageProfitPercentage,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::EnsName,
        SortKey::GroupName,
        SortKey::Categories,
        SortKey::StartingAmount,
        SortKey::CurrentValue,
        SortKey::ProfitUsd,
        SortKey::ProfitPercentage,
        SortKey::NumberOfUsers,
        SortKey::TotalProfitUsd,
        SortKey::AverageProfitPercentage,
    ];

    /// Name used in actions and JSON output.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SortKey::EnsName => "ensName",
            SortKey::GroupName => "groupName",
            SortKey::Categories => "categories",
            SortKey::StartingAmount => "startingAmount",
            SortKey::CurrentValue => "currentValue",
            SortKey::ProfitUsd => "profitUSD",
            SortKey::ProfitPercentage => "profitPercentage",
            SortKey::NumberOfUsers => "numberOfUsers",
            SortKey::TotalProfitUsd => "totalProfitUSD",
            SortKey::AverageProfitPercentage => "averageProfitPercentage",
        }
    }

    /// Whether the key is a column of `table`.
    pub fn belongs_to(&self, table: Table) -> bool {
        match self {
            SortKey::StartingAmount => true,
            SortKey::EnsName
            | SortKey::Categories
            | SortKey::CurrentValue
            | SortKey::ProfitUsd
            | SortKey::ProfitPercentage => table == Table::Participants,
            SortKey::GroupName
            | SortKey::NumberOfUsers
            | SortKey::TotalProfitUsd
            | SortKey::AverageProfitPercentage => table == Table::Groups,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for SortKey {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LeaderboardError::UnknownSortKey(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// The header toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub active_key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Activate a column header and return the direction to sort in.
    ///
    /// Re-activating the active key flips the direction; any other key
    /// starts descending.
    pub fn activate(&mut self, key: SortKey) -> SortDirection {
        if self.active_key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.active_key = Some(key);
            self.direction = SortDirection::Desc;
        }
        self.direction
    }

    pub fn is_active(&self, key: SortKey) -> bool {
        self.active_key == Some(key)
    }
}

/// A record's value for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortField<'a> {
    Text(Option<&'a str>),
    Number(f64),
    Categories(&'a [Category]),
}

/// Records that can be ordered by a [`SortKey`].
pub trait Sortable {
    /// The record's value for `key`, `None` if the record has no such column.
    fn sort_field(&self, key: SortKey) -> Option<SortField<'_>>;
}

impl Sortable for Participant {
    fn sort_field(&self, key: SortKey) -> Option<SortField<'_>> {
        match key {
            SortKey::EnsName => Some(SortField::Text(self.ens_name.as_deref())),
            SortKey::Categories => Some(SortField::Categories(self.categories.as_slice())),
            SortKey::StartingAmount => Some(SortField::Number(self.starting_amount)),
            SortKey::CurrentValue => Some(SortField::Number(self.current_value)),
            SortKey::ProfitUsd => Some(SortField::Number(self.profit_usd)),
            SortKey::ProfitPercentage => Some(SortField::Number(self.profit_percentage)),
            _ => None,
        }
    }
}

impl Sortable for Group {
    fn sort_field(&self, key: SortKey) -> Option<SortField<'_>> {
        match key {
            SortKey::GroupName => Some(SortField::Text(Some(self.group_name.as_str()))),
            SortKey::NumberOfUsers => Some(SortField::Number(self.number_of_users as f64)),
            SortKey::StartingAmount => Some(SortField::Number(self.starting_amount)),
            SortKey::TotalProfitUsd => Some(SortField::Number(self.total_profit_usd)),
            SortKey::AverageProfitPercentage => {
                Some(SortField::Number(self.average_profit_percentage))
            }
            _ => None,
        }
    }
}

/// Enumeration position of the category at the rotation index.
///
/// `None` when the record has fewer categories than the index or the
/// label is outside the enumeration; `None` orders before any position.
pub fn category_rank(categories: &[Category], rotation: usize) -> Option<usize> {
    categories
        .get(rotation % CATEGORY_COUNT)
        .and_then(Category::position)
}

/// Ascending comparison of two records on `key`.
pub fn compare<T: Sortable>(a: &T, b: &T, key: SortKey, rotation: usize) -> Ordering {
    match (a.sort_field(key), b.sort_field(key)) {
        (Some(SortField::Text(x)), Some(SortField::Text(y))) => {
            x.unwrap_or_default().cmp(y.unwrap_or_default())
        }
        (Some(SortField::Number(x)), Some(SortField::Number(y))) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(SortField::Categories(x)), Some(SortField::Categories(y))) => {
            category_rank(x, rotation).cmp(&category_rank(y, rotation))
        }
        _ => Ordering::Equal,
    }
}

/// Return `records` ordered by `key` in `direction`.
///
/// Ties keep their input order.
pub fn sort_records<T: Sortable + Clone>(
    records: &[T],
    key: SortKey,
    direction: SortDirection,
    rotation: usize,
) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key, rotation);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

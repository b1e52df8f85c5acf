//! Data models for the leaderboard.
//!
//! This module contains the snapshot records (participants and group
//! seeds) and the derived group aggregates.

use crate::categories::Category;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An individual leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Wallet address; the participant's identity.
    pub wallet_address: String,
    /// ENS name, if the wallet has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
    /// Category memberships, in snapshot order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Amount the participant started with.
    #[serde(default)]
    pub starting_amount: f64,
    /// Current portfolio value.
    #[serde(default)]
    pub current_value: f64,
    /// Profit in the reference currency (signed).
    #[serde(default, rename = "profitUSD")]
    pub profit_usd: f64,
    /// Profit as a percentage of the starting amount (signed).
    #[serde(default)]
    pub profit_percentage: f64,
}

impl Participant {
    /// Whether this participant belongs to the named group.
    pub fn belongs_to(&self, group_name: &str) -> bool {
        self.categories.iter().any(|c| c.label() == group_name)
    }

    /// ENS name, or the truncated wallet address when there is none.
    pub fn display_name(&self, prefix: usize, suffix: usize) -> String {
        match self.ens_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => truncate_address(&self.wallet_address, prefix, suffix),
        }
    }
}

/// Shorten a wallet address to `prefix` leading and `suffix` trailing characters.
pub fn truncate_address(address: &str, prefix: usize, suffix: usize) -> String {
    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(prefix).collect();
    let tail: String = chars[chars.len().saturating_sub(suffix)..].iter().collect();

    format!("{}...{}", head, tail)
}

/// A group entry as listed in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSeed {
    pub group_name: String,
}

/// A group with its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group name; matches a category label.
    pub group_name: String,
    /// Members of the group.
    pub number_of_users: usize,
    /// Summed starting amount of the members.
    pub starting_amount: f64,
    /// Summed profit of the members.
    #[serde(rename = "totalProfitUSD")]
    pub total_profit_usd: f64,
    /// Mean profit percentage of the members, 0 for an empty group.
    pub average_profit_percentage: f64,
}

impl Group {
    /// A group with no members.
    pub fn empty(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            number_of_users: 0,
            starting_amount: 0.0,
            total_profit_usd: 0.0,
            average_profit_percentage: 0.0,
        }
    }
}

/// The bundled data snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub groups: Vec<GroupSeed>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_updated: DateTime<Utc>,
}

/// `lastUpdated` is either an RFC 3339 string or epoch milliseconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", ms))),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(address: &str, ens: Option<&str>) -> Participant {
        Participant {
            wallet_address: address.to_string(),
            ens_name: ens.map(String::from),
            categories: vec![Category::Citizens, Category::TruemarketAttesters],
            starting_amount: 1000.0,
            current_value: 1100.0,
            profit_usd: 100.0,
            profit_percentage: 10.0,
        }
    }

    #[test]
    fn test_display_name_prefers_ens() {
        let p = participant("0x1234567890abcdef", Some("alice.eth"));
        assert_eq!(p.display_name(4, 4), "alice.eth");
    }

    #[test]
    fn test_display_name_falls_back_to_address() {
        let p = participant("0x1234567890abcdef", None);
        assert_eq!(p.display_name(4, 4), "0x12...cdef");

        let blank = participant("0x1234567890abcdef", Some(""));
        assert_eq!(blank.display_name(4, 4), "0x12...cdef");
    }

    #[test]
    fn test_truncate_short_and_empty_addresses() {
        assert_eq!(truncate_address("", 4, 4), "");
        assert_eq!(truncate_address("0xab", 4, 4), "0xab...0xab");
    }

    #[test]
    fn test_belongs_to() {
        let p = participant("0x1", None);
        assert!(p.belongs_to("Citizens"));
        assert!(p.belongs_to("Truemarket Attesters"));
        assert!(!p.belongs_to("Top 100 Delegate"));
    }

    #[test]
    fn test_parse_participant_camel_case() {
        let json = r#"{
            "walletAddress": "0xabc",
            "ensName": "bob.eth",
            "categories": ["Citizens"],
            "startingAmount": 500,
            "currentValue": 450,
            "profitUSD": -50,
            "profitPercentage": -10
        }"#;

        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.ens_name.as_deref(), Some("bob.eth"));
        assert_eq!(p.profit_usd, -50.0);
        assert_eq!(p.categories, vec![Category::Citizens]);
    }

    #[test]
    fn test_snapshot_timestamp_formats() {
        let text = r#"{"participants": [], "lastUpdated": "2024-10-01T12:00:00Z"}"#;
        let millis = r#"{"participants": [], "lastUpdated": 1727784000000}"#;

        let a: Snapshot = serde_json::from_str(text).unwrap();
        let b: Snapshot = serde_json::from_str(millis).unwrap();
        assert_eq!(a.last_updated, b.last_updated);
        assert!(a.groups.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_bad_timestamp() {
        let json = r#"{"participants": [], "lastUpdated": "yesterday"}"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }
}

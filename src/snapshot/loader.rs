//! Snapshot loading.
//!
//! Reads the bundled JSON snapshot from disk. Only I/O failures and
//! malformed JSON are errors; record contents are taken as-is.

use crate::error::{LeaderboardError, Result};
use crate::models::Snapshot;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    debug!("Reading snapshot from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| LeaderboardError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = parse_snapshot(&content).map_err(|source| LeaderboardError::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {} participants and {} groups (last updated {})",
        snapshot.participants.len(),
        snapshot.groups.len(),
        snapshot.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(snapshot)
}

/// Parse snapshot JSON.
pub fn parse_snapshot(content: &str) -> std::result::Result<Snapshot, serde_json::Error> {
    let snapshot: Snapshot = serde_json::from_str(content)?;

    let unknown = snapshot
        .participants
        .iter()
        .flat_map(|p| p.categories.iter())
        .filter(|c| c.position().is_none())
        .count();
    if unknown > 0 {
        warn!("{} category labels are outside the known enumeration", unknown);
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/data.json");
        let snapshot = load_snapshot(&path).unwrap();

        assert_eq!(snapshot.participants.len(), 23);
        assert_eq!(snapshot.groups.len(), 7);
    }

    #[test]
    fn test_missing_file() {
        let err = load_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LeaderboardError::SnapshotRead { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ \"participants\": [ }}").unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, LeaderboardError::SnapshotParse { .. }));
        assert!(err.to_string().contains("failed to parse snapshot"));
    }

    #[test]
    fn test_unknown_categories_are_kept() {
        let json = r#"{
            "participants": [
                {"walletAddress": "0x1", "categories": ["Citizens", "Moon Boys"],
                 "startingAmount": 1, "currentValue": 1, "profitUSD": 0, "profitPercentage": 0}
            ],
            "lastUpdated": 0
        }"#;

        let snapshot = parse_snapshot(json).unwrap();
        assert_eq!(snapshot.participants[0].categories[1].label(), "Moon Boys");
    }
}

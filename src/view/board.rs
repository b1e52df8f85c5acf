//! Leaderboard view state.
//!
//! A [`Board`] owns the display order of both tables, the shared header
//! toggle state, the category rotation counter and the current page.
//! Every [`Action`] is applied synchronously.

use crate::analysis::{aggregate_groups, sort_records, SortKey, SortState, Table};
use crate::error::{LeaderboardError, Result};
use crate::models::{Group, Participant, Snapshot};
use crate::view::action::Action;
use crate::view::pagination::{PageControls, PageNav, Paginator};
use chrono::{DateTime, Utc};
use tracing::debug;

/// A record together with its leaderboard position.
#[derive(Debug, Clone)]
pub struct RankedRow<'a, T> {
    pub position: usize,
    pub record: &'a T,
}

#[derive(Debug, Clone)]
pub struct Board {
    participants: Vec<Participant>,
    groups: Vec<Group>,
    sort: SortState,
    category_step: usize,
    paginator: Paginator,
    last_updated: DateTime<Utc>,
}

impl Board {
    /// Build the board from a snapshot.
    ///
    /// Group aggregates are computed here, once, over the unsorted
    /// snapshot; later sorting never recomputes them.
    pub fn new(snapshot: Snapshot, page_size: usize) -> Result<Self> {
        let paginator = Paginator::new(page_size)?;
        let groups = aggregate_groups(&snapshot.participants, &snapshot.groups);

        Ok(Self {
            participants: snapshot.participants,
            groups,
            sort: SortState::default(),
            category_step: 0,
            paginator,
            last_updated: snapshot.last_updated,
        })
    }

    pub fn apply(&mut self, action: &Action) -> Result<()> {
        debug!("Applying action: {:?}", action);
        match *action {
            Action::Sort {
                table: Table::Participants,
                key,
            } => self.sort_participants(key),
            Action::Sort {
                table: Table::Groups,
                key,
            } => self.sort_groups(key),
            Action::Page(nav) => {
                self.go_to(nav);
                Ok(())
            }
        }
    }

    /// Activate a participants-table header.
    pub fn sort_participants(&mut self, key: SortKey) -> Result<()> {
        ensure_column(key, Table::Participants)?;
        let direction = self.sort.activate(key);

        // The comparison uses the rotation index from before this activation.
        let rotation = self.category_step;
        if key == SortKey::Categories {
            self.category_step += 1;
        }

        self.participants = sort_records(&self.participants, key, direction, rotation);
        Ok(())
    }

    /// Activate a groups-table header.
    pub fn sort_groups(&mut self, key: SortKey) -> Result<()> {
        ensure_column(key, Table::Groups)?;
        let direction = self.sort.activate(key);
        self.groups = sort_records(&self.groups, key, direction, self.category_step);
        Ok(())
    }

    pub fn go_to(&mut self, nav: PageNav) {
        self.paginator.navigate(nav, self.participants.len());
    }

    #[cfg(test)]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn category_step(&self) -> usize {
        self.category_step
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.participants.len())
    }

    pub fn page_controls(&self) -> PageControls {
        self.paginator.controls(self.participants.len())
    }

    /// Rows of the current participants page.
    pub fn page_rows(&self) -> Vec<RankedRow<'_, Participant>> {
        self.rows_for_page(self.current_page())
    }

    /// Rows of every participants page, in order.
    pub fn all_pages(&self) -> Vec<Vec<RankedRow<'_, Participant>>> {
        (1..=self.total_pages())
            .map(|page| self.rows_for_page(page))
            .collect()
    }

    pub fn group_rows(&self) -> Vec<RankedRow<'_, Group>> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, record)| RankedRow {
                position: i + 1,
                record,
            })
            .collect()
    }

    fn rows_for_page(&self, page: usize) -> Vec<RankedRow<'_, Participant>> {
        let range = self.paginator.page_range(page, self.participants.len());
        self.participants[range]
            .iter()
            .enumerate()
            .map(|(i, record)| RankedRow {
                position: self.paginator.position(page, i),
                record,
            })
            .collect()
    }
}

fn ensure_column(key: SortKey, table: Table) -> Result<()> {
    if key.belongs_to(table) {
        Ok(())
    } else {
        Err(LeaderboardError::KeyNotInTable { key, table })
    }
}

//! Board rendering.
//!
//! Plain-text, Markdown and JSON renderings of a [`Board`]. The helpers
//! here hold the presentation rules shared by every format.

pub mod generator;
pub mod text;

pub use generator::{generate_json_report, generate_markdown_report};
pub use text::generate_text_report;

use crate::analysis::{SortKey, SortState};
use crate::categories::{CATEGORIES, INACTIVE_GLYPH};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::models::Participant;
use crate::view::{Board, PageControls};
use anyhow::Result;
use chrono::{DateTime, Local, Utc};

/// Participants table columns, left to right.
pub const PARTICIPANT_COLUMNS: [SortKey; 6] = [
    SortKey::EnsName,
    SortKey::Categories,
    SortKey::StartingAmount,
    SortKey::CurrentValue,
    SortKey::ProfitUsd,
    SortKey::ProfitPercentage,
];

/// Groups table columns, left to right.
pub const GROUP_COLUMNS: [SortKey; 5] = [
    SortKey::GroupName,
    SortKey::NumberOfUsers,
    SortKey::StartingAmount,
    SortKey::TotalProfitUsd,
    SortKey::AverageProfitPercentage,
];

/// Presentation settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency: String,
    pub address_prefix: usize,
    pub address_suffix: usize,
    pub icon_base: String,
    pub all_pages: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            currency: config.display.currency.clone(),
            address_prefix: config.display.address_prefix,
            address_suffix: config.display.address_suffix,
            icon_base: config.icons.base_path.clone(),
            all_pages: false,
        }
    }
}

impl RenderOptions {
    pub fn display_name(&self, participant: &Participant) -> String {
        participant.display_name(self.address_prefix, self.address_suffix)
    }

    /// Full path of an icon asset.
    pub fn icon_path(&self, file: &str) -> String {
        format!("{}/{}", self.icon_base.trim_end_matches('/'), file)
    }
}

/// Render the board in the requested format.
pub fn render(board: &Board, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(board, options)),
        OutputFormat::Markdown => Ok(generate_markdown_report(board, options)),
        OutputFormat::Json => generate_json_report(board, options),
    }
}

/// Header text of a column.
pub fn column_label(key: SortKey, currency: &str) -> String {
    match key {
        SortKey::EnsName => "Address".to_string(),
        SortKey::GroupName => "Group".to_string(),
        SortKey::Categories => "Categories".to_string(),
        SortKey::StartingAmount => "Starting Amount".to_string(),
        SortKey::CurrentValue => "Current Value".to_string(),
        SortKey::ProfitUsd | SortKey::TotalProfitUsd => format!("Profit ({})", currency),
        SortKey::ProfitPercentage | SortKey::AverageProfitPercentage => "Profit (%)".to_string(),
        SortKey::NumberOfUsers => "# of Users".to_string(),
    }
}

/// Header cell, marked with the direction arrow when it is the active sort.
pub fn header_cell(key: SortKey, sort: &SortState, currency: &str) -> String {
    let label = column_label(key, currency);
    if sort.is_active(key) {
        format!("{} {}", sort.direction.arrow(), label)
    } else {
        label
    }
}

/// Medal for the top three positions, the number otherwise.
pub fn position_label(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}

/// One glyph per strip category: colored when the participant belongs.
pub fn category_strip(participant: &Participant) -> String {
    CATEGORIES
        .iter()
        .filter(|entry| entry.in_strip)
        .map(|entry| {
            if participant.belongs_to(entry.label) {
                entry.glyph
            } else {
                INACTIVE_GLYPH
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Amounts are shown as plain numbers.
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

/// Pagination control, e.g. `« < [1] 2 3 > »`; disabled buttons show as `-`.
pub fn pagination_line(controls: &PageControls) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            "-".to_string()
        }
    };

    let mut parts = vec![
        button("«", controls.first_enabled),
        button("<", controls.prev_enabled),
    ];
    parts.extend(controls.pages.iter().map(|page| {
        if page.active {
            format!("[{}]", page.number)
        } else {
            page.number.to_string()
        }
    }));
    parts.push(button(">", controls.next_enabled));
    parts.push(button("»", controls.last_enabled));

    parts.join(" ")
}

/// Footer line with the snapshot time in local time.
pub fn last_updated_line(last_updated: DateTime<Utc>) -> String {
    format!(
        "Last Updated: {}",
        last_updated
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    )
}

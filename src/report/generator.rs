//! Markdown and JSON board generation.
//!
//! Markdown output uses GFM tables with the category icons as images.
//! JSON output serializes the current view of the board.

use super::{
    format_amount, header_cell, last_updated_line, pagination_line, position_label,
    RenderOptions, GROUP_COLUMNS, PARTICIPANT_COLUMNS,
};
use crate::analysis::{SortKey, SortState};
use crate::categories::{entry_for, CATEGORIES};
use crate::models::{Group, Participant};
use crate::view::{Board, PageControls, RankedRow};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Generate a complete Markdown board.
pub fn generate_markdown_report(board: &Board, options: &RenderOptions) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Futarchy Experiment Leaderboard\n\n");

    output.push_str(&generate_participants_section(board, options));
    output.push_str(&generate_groups_section(board, options));

    // Footer
    output.push_str("---\n\n");
    output.push_str(&format!("*{}*\n", last_updated_line(board.last_updated())));

    output
}

/// Generate the individual participants section.
fn generate_participants_section(board: &Board, options: &RenderOptions) -> String {
    let mut section = String::new();

    section.push_str("## Individual\n\n");

    if options.all_pages {
        for (i, page) in board.all_pages().iter().enumerate() {
            section.push_str(&format!("### Page {} of {}\n\n", i + 1, board.total_pages()));
            section.push_str(&generate_participants_table(board, page, options));
        }
    } else {
        section.push_str(&generate_participants_table(board, &board.page_rows(), options));
        section.push_str(&format!(
            "Page {} of {} &nbsp; `{}`\n\n",
            board.current_page(),
            board.total_pages(),
            pagination_line(&board.page_controls())
        ));
    }

    section
}

fn generate_participants_table(
    board: &Board,
    rows: &[RankedRow<'_, Participant>],
    options: &RenderOptions,
) -> String {
    let sort = board.sort_state();
    let mut table = table_header(&PARTICIPANT_COLUMNS, &sort, options);

    for row in rows {
        let p = row.record;
        table.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {}% |\n",
            position_label(row.position),
            escape_cell(&options.display_name(p)),
            category_icons(p, options),
            format_amount(p.starting_amount),
            format_amount(p.current_value),
            format_amount(p.profit_usd),
            p.profit_percentage
        ));
    }
    table.push('\n');

    table
}

/// Generate the groups section.
fn generate_groups_section(board: &Board, options: &RenderOptions) -> String {
    let sort = board.sort_state();
    let mut section = String::new();

    section.push_str("## Groups\n\n");
    section.push_str(&table_header(&GROUP_COLUMNS, &sort, options));

    for row in board.group_rows() {
        let g = row.record;
        let name = match entry_for(&g.group_name) {
            Some(entry) => format!(
                "![{}]({}) {}",
                entry.label,
                options.icon_path(entry.colored_icon),
                escape_cell(&g.group_name)
            ),
            None => escape_cell(&g.group_name),
        };

        section.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.2}% |\n",
            position_label(row.position),
            name,
            g.number_of_users,
            format_amount(g.starting_amount),
            format_amount(g.total_profit_usd),
            g.average_profit_percentage
        ));
    }
    section.push('\n');

    section
}

fn table_header(
    columns: &[SortKey],
    sort: &SortState,
    options: &RenderOptions,
) -> String {
    let mut header = String::from("| # |");
    let mut rule = String::from("|:---:|");

    for key in columns {
        header.push_str(&format!(" {} |", header_cell(*key, sort, &options.currency)));
        rule.push_str(":---|");
    }

    format!("{}\n{}\n", header, rule)
}

/// Icon strip: colored image for member categories, grey otherwise.
fn category_icons(participant: &Participant, options: &RenderOptions) -> String {
    CATEGORIES
        .iter()
        .filter(|entry| entry.in_strip)
        .map(|entry| {
            let file = if participant.belongs_to(entry.label) {
                entry.colored_icon
            } else {
                entry.grey_icon.unwrap_or(entry.colored_icon)
            };
            format!("![{}]({})", entry.label, options.icon_path(file))
        })
        .collect::<Vec<_>>()
        .join("")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// JSON view of the board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardView<'a> {
    sort: SortState,
    category_step: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
    pagination: PageControls,
    participants: Vec<ParticipantView<'a>>,
    groups: Vec<GroupView<'a>>,
    last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantView<'a> {
    position: usize,
    display_name: String,
    #[serde(flatten)]
    participant: &'a Participant,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupView<'a> {
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(flatten)]
    group: &'a Group,
}

/// Generate a JSON rendering of the current view.
pub fn generate_json_report(board: &Board, options: &RenderOptions) -> Result<String> {
    let rows: Vec<RankedRow<'_, Participant>> = if options.all_pages {
        board.all_pages().into_iter().flatten().collect()
    } else {
        board.page_rows()
    };

    let view = BoardView {
        sort: board.sort_state(),
        category_step: board.category_step(),
        page: board.current_page(),
        page_size: board.page_size(),
        total_pages: board.total_pages(),
        pagination: board.page_controls(),
        participants: rows
            .into_iter()
            .map(|row| ParticipantView {
                position: row.position,
                display_name: options.display_name(row.record),
                participant: row.record,
            })
            .collect(),
        groups: board
            .group_rows()
            .into_iter()
            .map(|row| GroupView {
                position: row.position,
                icon: entry_for(&row.record.group_name)
                    .map(|entry| options.icon_path(entry.colored_icon)),
                group: row.record,
            })
            .collect(),
        last_updated: board.last_updated(),
    };

    serde_json::to_string_pretty(&view).map_err(Into::into)
}

//! Plain-text board rendering for the terminal.

use super::{
    category_strip, format_amount, header_cell, last_updated_line, pagination_line,
    position_label, RenderOptions, GROUP_COLUMNS, PARTICIPANT_COLUMNS,
};
use crate::categories::entry_for;
use crate::models::{Group, Participant};
use crate::view::{Board, RankedRow};
use unicode_width::UnicodeWidthStr;

/// Render the whole board as aligned text tables.
pub fn generate_text_report(board: &Board, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str("FUTARCHY EXPERIMENT LEADERBOARD\n\n");

    output.push_str("== Individual ==\n\n");
    if options.all_pages {
        for (i, page) in board.all_pages().iter().enumerate() {
            output.push_str(&format!("-- Page {} of {} --\n", i + 1, board.total_pages()));
            output.push_str(&participants_table(board, page, options));
            output.push('\n');
        }
    } else {
        output.push_str(&participants_table(board, &board.page_rows(), options));
        output.push('\n');
        output.push_str(&format!(
            "Page {} of {}   {}\n",
            board.current_page(),
            board.total_pages(),
            pagination_line(&board.page_controls())
        ));
    }
    output.push('\n');

    output.push_str("== Groups ==\n\n");
    output.push_str(&groups_table(board, &board.group_rows(), options));
    output.push('\n');

    output.push_str(&last_updated_line(board.last_updated()));
    output.push('\n');

    output
}

fn participants_table(
    board: &Board,
    rows: &[RankedRow<'_, Participant>],
    options: &RenderOptions,
) -> String {
    let sort = board.sort_state();
    let mut headers = vec!["#".to_string()];
    headers.extend(
        PARTICIPANT_COLUMNS
            .iter()
            .map(|key| header_cell(*key, &sort, &options.currency)),
    );

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let p = row.record;
            vec![
                position_label(row.position),
                options.display_name(p),
                category_strip(p),
                format_amount(p.starting_amount),
                format_amount(p.current_value),
                format_amount(p.profit_usd),
                format!("{}%", p.profit_percentage),
            ]
        })
        .collect();

    render_table(&headers, &body)
}

fn groups_table(board: &Board, rows: &[RankedRow<'_, Group>], options: &RenderOptions) -> String {
    let sort = board.sort_state();
    let mut headers = vec!["#".to_string()];
    headers.extend(
        GROUP_COLUMNS
            .iter()
            .map(|key| header_cell(*key, &sort, &options.currency)),
    );

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let g = row.record;
            let name = match entry_for(&g.group_name) {
                Some(entry) => format!("{} {}", entry.glyph, g.group_name),
                None => g.group_name.clone(),
            };
            vec![
                position_label(row.position),
                name,
                g.number_of_users.to_string(),
                format_amount(g.starting_amount),
                format_amount(g.total_profit_usd),
                format!("{:.2}%", g.average_profit_percentage),
            ]
        })
        .collect();

    render_table(&headers, &body)
}

/// Lay out rows in columns padded to the widest cell.
///
/// Widths are terminal columns, so medals and emoji glyphs count double.
fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let width = |s: &str| UnicodeWidthStr::width(s);

    let mut widths: Vec<usize> = headers.iter().map(|h| width(h.as_str())).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(width(cell.as_str()));
            }
        }
    }

    let format_row = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - width(cell.as_str()))))
            .collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut table = format_row(headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    table.push_str(&format!("{}\n", rule.join("-+-")));

    if rows.is_empty() {
        table.push_str("(no entries)\n");
    }
    for row in rows {
        table.push_str(&format_row(row.as_slice()));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;
    use crate::view::pagination::PageNav;

    fn board() -> Board {
        let snapshot: Snapshot =
            serde_json::from_str(include_str!("../../fixtures/data.json")).unwrap();
        Board::new(snapshot, 10).unwrap()
    }

    #[test]
    fn test_generate_text_report() {
        let board = board();
        let text = generate_text_report(&board, &RenderOptions::default());

        assert!(text.contains("== Individual =="));
        assert!(text.contains("== Groups =="));
        assert!(text.contains("Profit (PLAY)"));
        assert!(text.contains("Page 1 of 3"));
        assert!(text.contains("🥇"));
        assert!(text.contains("Last Updated:"));
    }

    #[test]
    fn test_current_page_only() {
        let mut board = board();
        board.go_to(PageNav::Last);
        let text = generate_text_report(&board, &RenderOptions::default());

        assert!(text.contains("Page 3 of 3"));
        assert!(text.contains("\n21 "));
        assert!(!text.contains("\n11 "));
    }

    #[test]
    fn test_all_pages() {
        let board = board();
        let options = RenderOptions {
            all_pages: true,
            ..RenderOptions::default()
        };
        let text = generate_text_report(&board, &options);

        assert!(text.contains("-- Page 3 of 3 --"));
        assert!(text.contains("\n11 "));
        assert!(text.contains("\n23 "));
    }

    #[test]
    fn test_render_table_alignment() {
        let headers = vec!["#".to_string(), "Name".to_string()];
        let rows = vec![
            vec!["1".to_string(), "alice".to_string()],
            vec!["10".to_string(), "bo".to_string()],
        ];

        let table = render_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "#  | Name");
        assert_eq!(lines[1], "---+------");
        assert_eq!(lines[2], "1  | alice");
        assert_eq!(lines[3], "10 | bo");
    }

    #[test]
    fn test_render_table_wide_glyphs() {
        let headers = vec!["#".to_string(), "Name".to_string()];
        let rows = vec![
            vec!["🥇".to_string(), "alice".to_string()],
            vec!["4".to_string(), "bo".to_string()],
            vec!["10".to_string(), "cy".to_string()],
        ];

        let table = render_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "#  | Name");
        assert_eq!(lines[2], "🥇 | alice");
        assert_eq!(lines[3], "4  | bo");
        assert_eq!(lines[4], "10 | cy");

        let separator_columns: Vec<usize> = lines
            .iter()
            .filter_map(|line| line.split_once(" | "))
            .map(|(first, _)| UnicodeWidthStr::width(first))
            .collect();
        assert!(separator_columns.iter().all(|w| *w == 2));
    }

    #[test]
    fn test_empty_table() {
        let table = render_table(&["#".to_string()], &[]);
        assert!(table.contains("(no entries)"));
    }
}

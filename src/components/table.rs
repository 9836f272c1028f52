//! Table rendering for the sample data tables
//!
//! Builds aligned text lines for a titled table. NULL cells are styled
//! distinctly from ordinary values, and matched rows can be highlighted
//! while the animation is in its match-finding steps.

use crate::model::Table;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Widest a single column may render; longer cells are truncated.
const MAX_COL_WIDTH: usize = 40;

/// Build display lines for a table: title, header, separator, data rows.
///
/// With `highlight_matches` set, rows flagged as participating in the join
/// are emphasized.
pub fn table_lines(table: &Table, highlight_matches: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {} ", table.title),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));

    let widths = column_widths(table);

    // Header row
    let header_spans: Vec<Span> = table
        .columns
        .iter()
        .enumerate()
        .flat_map(|(i, col)| {
            vec![
                Span::styled(
                    pad_cell(col, widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    // Separator
    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    // Data rows
    for row in &table.rows {
        let row_style = if highlight_matches && row.matched {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let row_spans: Vec<Span> = row
            .values
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(10);
                let style = if cell.is_null() {
                    // Null sentinel must read differently from real values
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    row_style
                };
                vec![
                    Span::styled(pad_cell(&cell.to_string(), width), style),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines
}

/// Per-column display widths: the widest of header and cells, capped.
fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.width()).collect();
    for row in &table.rows {
        for (i, cell) in row.values.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.to_string().width());
            }
        }
    }
    for w in &mut widths {
        *w = (*w).min(MAX_COL_WIDTH);
    }
    widths
}

/// Pad (or truncate) a cell to the target display width.
///
/// Display width, not char count - rating cells contain wide glyphs.
fn pad_cell(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width > width {
        let mut out = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let w = ch.to_string().width();
            if used + w > width.saturating_sub(3) {
                break;
            }
            used += w;
            out.push(ch);
        }
        out.push_str("...");
        return out;
    }
    format!("{}{}", text, " ".repeat(width - text_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Row};

    fn sample_table() -> Table {
        Table {
            title: "Customers".to_string(),
            columns: vec!["id".to_string(), "name".to_string()],
            rows: vec![
                Row {
                    values: vec![CellValue::Int(1), CellValue::Text("Vishnu".to_string())],
                    matched: true,
                },
                Row {
                    values: vec![CellValue::Int(2), CellValue::Null],
                    matched: false,
                },
            ],
        }
    }

    /// Every span styled like a NULL cell in the given lines.
    fn null_styled_spans(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| {
                s.style.fg == Some(Color::Red) && s.style.add_modifier.contains(Modifier::ITALIC)
            })
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_null_cell_styled_distinctly() {
        let lines = table_lines(&sample_table(), false);
        let nulls = null_styled_spans(&lines);
        assert_eq!(nulls.len(), 1);
        assert!(nulls[0].starts_with("NULL"));
    }

    #[test]
    fn test_ordinary_cells_not_null_styled() {
        let lines = table_lines(&sample_table(), false);
        let nulls = null_styled_spans(&lines);
        assert!(nulls.iter().all(|s| !s.contains("Vishnu")));
    }

    #[test]
    fn test_matched_row_highlight_is_opt_in() {
        let plain = table_lines(&sample_table(), false);
        let highlighted = table_lines(&sample_table(), true);

        let bold_green = |lines: &[Line<'_>]| {
            lines
                .iter()
                .flat_map(|l| l.spans.iter())
                .any(|s| {
                    s.style.fg == Some(Color::Green)
                        && s.style.add_modifier.contains(Modifier::BOLD)
                        && s.content.contains("Vishnu")
                })
        };

        assert!(!bold_green(&plain));
        assert!(bold_green(&highlighted));
    }

    #[test]
    fn test_lines_cover_title_header_separator_rows() {
        let table = sample_table();
        let lines = table_lines(&table, false);
        // title + header + separator + one line per row
        assert_eq!(lines.len(), 3 + table.rows.len());
    }

    #[test]
    fn test_pad_cell_uses_display_width() {
        // Star glyphs are double-width; padding must account for that.
        let padded = pad_cell("⭐⭐", 6);
        assert_eq!(padded.width(), 6);
    }

    #[test]
    fn test_pad_cell_truncates_long_text() {
        let padded = pad_cell("abcdefghij", 8);
        assert!(padded.ends_with("..."));
        assert!(padded.width() <= 8);
    }
}

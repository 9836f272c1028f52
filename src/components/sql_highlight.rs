//! SQL syntax highlighting for the query panel
//!
//! A small line-based scanner: keywords, string literals, numbers, `--`
//! comments. The authored queries never use multi-line comments, so each
//! line highlights independently.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Keywords the authored queries actually draw from.
const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "FULL", "CROSS",
    "SELF", "ON", "AS", "AND", "OR", "NOT", "IS", "NULL", "UNION", "ALL", "DISTINCT",
    "GROUP", "BY", "ORDER", "HAVING", "LIMIT",
];

fn keyword_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Convert a SQL string into highlighted lines, one per input line.
pub fn highlight_query(sql: &str) -> Vec<Line<'static>> {
    let lines: Vec<Line> = sql.lines().map(highlight_line).collect();
    if lines.is_empty() {
        return vec![Line::from("")];
    }
    lines
}

fn highlight_line(line: &str) -> Line<'static> {
    // A `--` comment swallows the rest of the line.
    if let Some(idx) = line.find("--") {
        let mut spans = scan_spans(&line[..idx]);
        spans.push(Span::styled(
            line[idx..].to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        return Line::from(spans);
    }
    Line::from(scan_spans(line))
}

/// Scan a comment-free fragment into styled spans.
fn scan_spans(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch == '\'' {
            // String literal, through the closing quote
            let mut literal = String::new();
            literal.push(chars.next().unwrap());
            for c in chars.by_ref() {
                literal.push(c);
                if c == '\'' {
                    break;
                }
            }
            spans.push(Span::styled(literal, Style::default().fg(Color::Green)));
        } else if ch.is_alphanumeric() || ch == '_' {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_alphanumeric() || c == '_' || c == '.' {
                    word.push(chars.next().unwrap());
                } else {
                    break;
                }
            }
            spans.push(classify_word(word));
        } else {
            // Whitespace and punctuation, grouped
            let mut run = String::new();
            while let Some(&c) = chars.peek() {
                if c == '\'' || c.is_alphanumeric() || c == '_' {
                    break;
                }
                run.push(chars.next().unwrap());
            }
            spans.push(Span::styled(run, Style::default().fg(Color::Gray)));
        }
    }

    spans
}

fn classify_word(word: String) -> Span<'static> {
    if SQL_KEYWORDS.contains(&word.to_uppercase().as_str()) {
        Span::styled(word, keyword_style())
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Span::styled(word, Style::default().fg(Color::Magenta))
    } else {
        Span::styled(word, Style::default().fg(Color::White))
    }
}

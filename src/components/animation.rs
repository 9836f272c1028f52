//! Animation strip - progress dots, caption, and the join diagram
//!
//! Pure line builders driven by (example, step, playing). The strip shows
//! narrative progress through one example: both source tables slide in,
//! matches light up, the operator appears, and the result unlocks below.

use crate::model::{ExampleRecord, Phase, MAX_STEP};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Number of text lines produced by `strip_lines`.
pub const STRIP_HEIGHT: u16 = 5;

/// Build the animation strip: dots, caption, playback status, diagram,
/// operator label. Always exactly `STRIP_HEIGHT` lines so the layout never
/// jumps between steps.
pub fn strip_lines(record: &ExampleRecord, step: u8, playing: bool) -> Vec<Line<'static>> {
    vec![
        progress_dots(step),
        caption_line(step),
        status_line(step, playing),
        diagram_line(record, step),
        operator_label(record, step),
    ]
}

/// One dot per step, filled up to the current step.
fn progress_dots(step: u8) -> Line<'static> {
    let mut spans = Vec::new();
    for s in 0..=MAX_STEP {
        let style = if s <= step {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(if s <= step { "●" } else { "○" }, style));
        if s < MAX_STEP {
            spans.push(Span::raw("  "));
        }
    }
    Line::from(spans)
}

fn caption_line(step: u8) -> Line<'static> {
    Line::from(Span::styled(
        Phase::from_step(step).caption(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn status_line(step: u8, playing: bool) -> Line<'static> {
    let (text, style) = if playing {
        ("▶ playing", Style::default().fg(Color::Green))
    } else if step == MAX_STEP {
        ("■ done - Space replays", Style::default().fg(Color::DarkGray))
    } else if step > 0 {
        ("▮▮ paused", Style::default().fg(Color::Yellow))
    } else {
        ("Space plays the animation", Style::default().fg(Color::DarkGray))
    };
    Line::from(Span::styled(text, style))
}

/// `[ Left ]  op  [ Right ]`, each element appearing at the step that
/// introduces it. Hidden elements render as same-width blanks so the
/// diagram stays centered.
fn diagram_line(record: &ExampleRecord, step: u8) -> Line<'static> {
    let left = format!("[ {} ]", record.left_table.title);
    let right = format!("[ {} ]", record.right_table.title);
    let op = operator_glyph(record);

    let emphasize = step >= 3;
    let left_style = table_style(Color::Blue, emphasize);
    let right_style = table_style(Color::Green, emphasize);

    Line::from(vec![
        reveal(left, step >= 1, left_style),
        Span::raw("   "),
        reveal(
            op.to_string(),
            step >= 4,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        reveal(right, step >= 2, right_style),
    ])
}

/// Operation name under the operator glyph, once joining begins.
fn operator_label(record: &ExampleRecord, step: u8) -> Line<'static> {
    reveal_line(
        record.name.clone(),
        step >= 4,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )
}

fn operator_glyph(record: &ExampleRecord) -> &'static str {
    if record.is_set_operation() {
        "∪"
    } else {
        "⋈"
    }
}

fn table_style(color: Color, emphasize: bool) -> Style {
    let style = Style::default().fg(color);
    if emphasize {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn reveal(text: String, visible: bool, style: Style) -> Span<'static> {
    if visible {
        Span::styled(text, style)
    } else {
        Span::raw(" ".repeat(text.chars().count()))
    }
}

fn reveal_line(text: String, visible: bool, style: Style) -> Line<'static> {
    Line::from(reveal(text, visible, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn example(index: usize) -> ExampleRecord {
        Catalog::builtin().unwrap().get(index).unwrap().clone()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_strip_has_fixed_height() {
        let record = example(0);
        for step in 0..=MAX_STEP {
            assert_eq!(
                strip_lines(&record, step, false).len(),
                STRIP_HEIGHT as usize
            );
        }
    }

    #[test]
    fn test_caption_tracks_step() {
        let record = example(0);
        let lines = strip_lines(&record, 3, true);
        assert_eq!(line_text(&lines[1]), "Finding matches...");
    }

    #[test]
    fn test_tables_revealed_in_order() {
        let record = example(0);

        let at_zero = line_text(&strip_lines(&record, 0, false)[3]);
        assert!(!at_zero.contains("Students"));
        assert!(!at_zero.contains("Enrollments"));

        let at_one = line_text(&strip_lines(&record, 1, true)[3]);
        assert!(at_one.contains("Students"));
        assert!(!at_one.contains("Enrollments"));

        let at_two = line_text(&strip_lines(&record, 2, true)[3]);
        assert!(at_two.contains("Students"));
        assert!(at_two.contains("Enrollments"));
    }

    #[test]
    fn test_operator_appears_at_join_step() {
        let record = example(0);
        assert!(!line_text(&strip_lines(&record, 3, true)[3]).contains('⋈'));
        assert!(line_text(&strip_lines(&record, 4, true)[3]).contains('⋈'));
        assert!(line_text(&strip_lines(&record, 4, true)[4]).contains("INNER JOIN"));
    }

    #[test]
    fn test_set_operations_use_union_glyph() {
        let catalog = Catalog::builtin().unwrap();
        let union = (0..catalog.len())
            .map(|i| catalog.get(i).unwrap())
            .find(|r| r.name == "UNION")
            .unwrap()
            .clone();
        assert!(line_text(&strip_lines(&union, 5, false)[3]).contains('∪'));
    }

    #[test]
    fn test_hidden_diagram_keeps_width() {
        let record = example(0);
        let hidden = line_text(&strip_lines(&record, 0, false)[3]);
        let shown = line_text(&strip_lines(&record, MAX_STEP, false)[3]);
        assert_eq!(hidden.chars().count(), shown.chars().count());
    }

    #[test]
    fn test_status_reflects_playback() {
        let record = example(0);
        assert!(line_text(&strip_lines(&record, 2, true)[2]).contains("playing"));
        assert!(line_text(&strip_lines(&record, 2, false)[2]).contains("paused"));
        assert!(line_text(&strip_lines(&record, MAX_STEP, false)[2]).contains("replays"));
    }
}

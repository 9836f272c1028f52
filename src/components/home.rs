//! Home component - Main application screen
//!
//! Header bar, animation strip, and the scrollable guide document:
//! definition, real-world analogy, source tables, result, explanation,
//! and the equivalent query. The guide is a pure function of the current
//! example and animation step; this component only owns the scroll offset.

use crate::action::Action;
use crate::component::Component;
use crate::components::{animation, calculate_main_layout, sql_highlight, table};
use crate::model::{ExampleRecord, Session, MAX_STEP};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

/// Home component for the main application view
pub struct HomeComponent {
    /// Scroll offset into the guide document
    scroll: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Jump back to the top of the guide; used when the example changes.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Animation
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::PlayPause),
            KeyCode::Char('r') => Some(Action::ResetAnimation),

            // Example navigation
            KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextExample),
            KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => {
                Some(Action::PreviousExample)
            }

            // Guide scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Help
            KeyCode::Char('?') => Some(Action::OpenHelp),

            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::ForceQuit),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::PageDown => self.scroll = self.scroll.saturating_add(10),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the session
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    session: &Session,
) -> Result<()> {
    let layout = calculate_main_layout(area);
    let record = session.current_example();
    let step = session.animation_step();

    render_header(frame, layout.header, session);

    let strip = Paragraph::new(animation::strip_lines(record, step, session.is_playing()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Animation ")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(strip, layout.animation);

    render_guide(frame, layout.guide, home, record, step);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let record = session.current_example();
    let position = format!(
        "{} of {}",
        session.current_index() + 1,
        session.catalog_size()
    );

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            record.name.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" joins-tui ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_guide(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    record: &ExampleRecord,
    step: u8,
) {
    let content = guide_lines(record, step);
    let visible_height = area.height.saturating_sub(2) as usize;

    // Clamp scroll offset
    let max_scroll = content.len().saturating_sub(visible_height);
    if home.scroll > max_scroll {
        home.scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Guide ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((home.scroll as u16, 0));

    frame.render_widget(paragraph, area);

    if content.len() > visible_height {
        let mut scrollbar_state =
            ScrollbarState::new(content.len().saturating_sub(visible_height)).position(home.scroll);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area.inner(ratatui::layout::Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &str| {
        Span::styled(
            format!(" {} ", k),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let help = Paragraph::new(Line::from(vec![
        key("Space"),
        Span::raw("Play/Pause  "),
        key("r"),
        Span::raw("Reset  "),
        key("n/→"),
        Span::raw("Next  "),
        key("p/←"),
        Span::raw("Previous  "),
        key("j/k"),
        Span::raw("Scroll  "),
        key("?"),
        Span::raw("Help  "),
        key("q"),
        Span::raw("Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

// ─────────────────────────────────────────────────────────────────────────
// Guide document
// ─────────────────────────────────────────────────────────────────────────

/// Build the guide document for one example at a given animation step.
///
/// The result, explanation, and query sections stay dimmed until the
/// animation reaches its terminal step; matched source rows light up from
/// the match-finding step onward.
pub fn guide_lines(record: &ExampleRecord, step: u8) -> Vec<Line<'static>> {
    let result_ready = step >= MAX_STEP;
    let highlight_matches = step >= 3;
    let mut lines = Vec::new();

    section_header(&mut lines, "Definition", Color::Blue);
    lines.push(Line::from(Span::styled(
        record.definition.clone(),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));

    section_header(&mut lines, "Real-world example", Color::Green);
    lines.push(Line::from(Span::styled(
        record.real_life_analogy.clone(),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));

    section_header(&mut lines, "Source tables", Color::Magenta);
    lines.extend(table::table_lines(&record.left_table, highlight_matches));
    lines.push(Line::from(""));
    lines.extend(table::table_lines(&record.right_table, highlight_matches));
    lines.push(Line::from(""));

    section_header(&mut lines, "Result", Color::LightRed);
    let mut result = table::table_lines(&record.result_table, false);
    result.push(Line::from(""));
    result.push(Line::from(vec![
        Span::styled(
            "Explanation: ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            record.explanation.clone(),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.extend(if result_ready { result } else { dimmed(result) });
    lines.push(Line::from(""));

    section_header(&mut lines, "Query", Color::Cyan);
    let query = sql_highlight::highlight_query(&record.query_text);
    lines.extend(if result_ready { query } else { dimmed(query) });

    lines
}

fn section_header(lines: &mut Vec<Line<'static>>, title: &str, color: Color) {
    lines.push(Line::from(Span::styled(
        format!("▌ {}", title),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
}

/// Flatten all styling to dark gray, the terminal rendition of the
/// original's reduced-opacity sections.
fn dimmed(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content, Style::default().fg(Color::DarkGray)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

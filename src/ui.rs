//! Ratatui rendering. Purely downstream of the engine: reads state and
//! derived stats, never mutates anything.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::{keyboard::Screen, runner::Session, storage::SnapshotStore};

const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

pub fn render<S: SnapshotStore>(frame: &mut Frame, session: &Session<S>) {
    match session.screen() {
        Screen::Browser => render_browser(frame, session),
        Screen::Quiz if session.engine().state().completed => render_results(frame, session),
        Screen::Quiz => render_quiz(frame, session),
    }
}

fn render_quiz<S: SnapshotStore>(frame: &mut Frame, session: &Session<S>) {
    let engine = session.engine();
    let state = engine.state();
    let stats = engine.stats();
    let question = engine.current_question();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", stats.score),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Accuracy ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}%", stats.accuracy),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Time ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_time(state.elapsed_seconds),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("MathX Quiz")),
        chunks[0],
    );

    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(stats.progress_percent as u16)
            .label(format!(
                "{}/{}",
                state.index + 1,
                engine.questions().total()
            )),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(question.text())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Question {}", question.id())),
            ),
        chunks[2],
    );

    let locked = state.is_answered(state.index);
    let selected = state.current_answer();
    let items: Vec<ListItem> = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_correct = question.is_correct(option);
            let is_selected = selected == Some(option.as_str());
            let (style, marker) = if locked {
                if is_correct {
                    (Style::default().fg(Color::Green), " ✔")
                } else if is_selected {
                    (Style::default().fg(Color::Red), " ✘")
                } else {
                    (Style::default().fg(Color::DarkGray), "")
                }
            } else {
                (Style::default(), "")
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}) {} ", i + 1, OPTION_LETTERS[i]),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{option}{marker}"), style),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Options")),
        chunks[3],
    );

    let hint = if locked {
        "Enter/→ next · ← back · Tab browse · q quit"
    } else {
        "1-4 answer · ← back · Tab browse · q quit"
    };
    render_footer(frame, chunks[4], hint);
}

fn render_results<S: SnapshotStore>(frame: &mut Frame, session: &Session<S>) {
    let engine = session.engine();
    let stats = engine.stats();
    let total = engine.questions().total();

    let chunks = centered(frame.area(), 50, 9);
    let lines = vec![
        Line::from(Span::styled(
            "Quiz complete!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(format!("Final Score: {} / {}", stats.score, total)),
        Line::from(format!(
            "Accuracy: {}% | Time: {}",
            stats.accuracy,
            format_time(engine.state().elapsed_seconds)
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "r restart · Tab browse · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Results")),
        chunks,
    );
}

fn render_browser<S: SnapshotStore>(frame: &mut Frame, session: &Session<S>) {
    let browser = session.browser();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let subjects: Vec<ListItem> = browser
        .subjects()
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let style = if i == browser.subject_index() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(subject.name, style))
        })
        .collect();
    frame.render_widget(
        List::new(subjects).block(Block::default().borders(Borders::ALL).title("Subjects")),
        columns[0],
    );

    let chapters: Vec<ListItem> = browser
        .active_subject()
        .chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let style = if i == browser.chapter_index() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", chapter.name), style),
                Span::styled(
                    format!(
                        "{}/{} questions · {}%",
                        chapter.completed,
                        chapter.questions,
                        chapter.progress_percent()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(chapters).block(
            Block::default()
                .borders(Borders::ALL)
                .title(browser.active_subject().name),
        ),
        columns[1],
    );

    render_footer(frame, rows[1], "↑/↓ chapter · ←/→ subject · Tab quiz · q quit");
}

fn render_footer(frame: &mut Frame, area: Rect, hint: &str) {
    frame.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

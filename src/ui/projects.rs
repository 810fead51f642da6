// Projects section rendering.
// Shows the feed's loading, failed, and ready states; ready projects are
// drawn as accent-colored cards.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Section};
use crate::feed::{ACCENT_PALETTE_LEN, ProjectRecord};
use crate::state::FeedState;

use super::staggered_visible;

/// Ticks between successive card appearances.
const CARD_STAGGER_TICKS: u32 = 2;

/// Fixed accent palette the cards cycle through, by record accent index.
const ACCENT_COLORS: [Color; ACCENT_PALETTE_LEN] = [
    Color::Rgb(102, 126, 234),
    Color::Rgb(240, 147, 251),
    Color::Rgb(79, 172, 254),
    Color::Rgb(67, 233, 123),
    Color::Rgb(250, 112, 154),
    Color::Rgb(48, 207, 208),
    Color::Rgb(168, 237, 234),
    Color::Rgb(255, 154, 158),
];

pub fn draw_projects(frame: &mut Frame, app: &App, area: Rect) {
    match &app.projects {
        FeedState::Idle | FeedState::Loading => {
            let loading = Paragraph::new("⏳ Loading projects from GitHub...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, area);
        }
        FeedState::Failed(message) => draw_failed(frame, message, area),
        FeedState::Ready(records) => draw_cards(frame, app, records, area),
    }
}

fn draw_failed(frame: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("❌ {}", message),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let failed = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(failed, chunks[1]);
}

fn draw_cards(frame: &mut Frame, app: &App, records: &[ProjectRecord], area: Rect) {
    let latch = &app.reveals[Section::Projects.index()];
    let mut lines = vec![
        Line::from(Span::styled(
            "Featured Projects",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Real-world applications built with modern technologies",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let shown = staggered_visible(latch, records.len(), CARD_STAGGER_TICKS);
    for record in records.iter().take(shown) {
        lines.extend(card_lines(record));
    }

    let cards = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.offset(), 0));
    frame.render_widget(cards, area);
}

fn card_lines(record: &ProjectRecord) -> Vec<Line<'_>> {
    let accent = ACCENT_COLORS[record.accent % ACCENT_PALETTE_LEN];
    let rule = Span::styled("▍ ", Style::default().fg(accent));

    let mut title_spans = vec![
        rule.clone(),
        Span::styled(
            record.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if record.stars > 0 {
        title_spans.push(Span::styled(
            format!("  ⭐ {}", record.stars),
            Style::default().fg(Color::Yellow),
        ));
    }

    let badges: Vec<Span> = std::iter::once(rule.clone())
        .chain(record.tech_stack.iter().map(|tech| {
            Span::styled(
                format!("[{}] ", tech),
                Style::default().fg(accent),
            )
        }))
        .collect();

    vec![
        Line::from(title_spans),
        Line::from(vec![
            rule.clone(),
            Span::styled(
                record.description.as_str(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(badges),
        Line::from(vec![
            rule,
            Span::styled(record.url.as_str(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ]
}

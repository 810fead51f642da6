// Static section rendering: hero, about, skills, experience, contact.
// Each section reveals its items progressively once its latch has fired.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Section};
use crate::content;
use crate::state::RevealLatch;

use super::staggered_visible;

/// Ticks between successive item appearances.
const STAGGER_TICKS: u32 = 2;

/// Ticks for a skill bar to reach its full level.
const FILL_TICKS: u32 = 10;

fn header(title: &str, subtitle: Option<&str>, latch: &RevealLatch) -> Vec<Line<'static>> {
    if !latch.is_visible() {
        return Vec::new();
    }

    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Hero: name, rotating typed subtitle, profile link, vertically centered.
pub fn draw_hero(frame: &mut Frame, app: &App, area: Rect) {
    let latch = &app.reveals[Section::Hero.index()];
    let shown = staggered_visible(latch, 3, STAGGER_TICKS);

    let mut lines: Vec<Line> = Vec::new();
    if shown >= 1 {
        lines.push(Line::from(Span::styled(
            content::PROFILE.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    if shown >= 2 {
        lines.push(Line::from(vec![
            Span::raw(app.typer.text()),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]));
    }
    if shown >= 3 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⌂ {}", content::PROFILE.github_url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hero, chunks[1]);
}

/// About: introduction text plus highlight cards.
pub fn draw_about(frame: &mut Frame, app: &App, area: Rect) {
    let latch = &app.reveals[Section::About.index()];
    let mut lines = header("About Me", None, latch);

    if latch.is_visible() {
        lines.push(Line::from(content::ABOUT_TEXT));
        lines.push(Line::from(""));
    }

    let shown = staggered_visible(latch, content::ABOUT_HIGHLIGHTS.len(), STAGGER_TICKS);
    for highlight in content::ABOUT_HIGHLIGHTS.iter().take(shown) {
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                highlight.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", highlight.detail),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.offset(), 0));
    frame.render_widget(about, area);
}

/// Skills: categories of named skills with animated level bars.
pub fn draw_skills(frame: &mut Frame, app: &App, area: Rect) {
    let latch = &app.reveals[Section::Skills.index()];
    let mut lines = header(
        "Technical Skills",
        Some("Technologies and tools I work with"),
        latch,
    );

    let bar_width = 24usize;
    let fraction = latch.fill_fraction(FILL_TICKS);
    let shown = staggered_visible(latch, content::SKILL_CATEGORIES.len(), STAGGER_TICKS);

    for category in content::SKILL_CATEGORIES.iter().take(shown) {
        lines.push(Line::from(Span::styled(
            category.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for skill in category.skills {
            let filled =
                ((f64::from(skill.level) / 100.0) * fraction * bar_width as f64).round() as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(bar_width.saturating_sub(filled))
            );
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<12} ", skill.name)),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {:>3}%", skill.level),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let skills = Paragraph::new(lines).scroll((app.scroll.offset(), 0));
    frame.render_widget(skills, area);
}

/// Experience: the learning journey timeline.
pub fn draw_experience(frame: &mut Frame, app: &App, area: Rect) {
    let latch = &app.reveals[Section::Experience.index()];
    let mut lines = header(
        "Learning Journey",
        Some("My path in technology and continuous learning"),
        latch,
    );

    let shown = staggered_visible(latch, content::TIMELINE.len(), STAGGER_TICKS);
    for entry in content::TIMELINE.iter().take(shown) {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::styled(
                entry.years,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            Style::default().fg(Color::DarkGray),
        )));
        for achievement in entry.achievements {
            lines.push(Line::from(format!("    • {}", achievement)));
        }
        lines.push(Line::from(""));
    }

    let experience = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.offset(), 0));
    frame.render_widget(experience, area);
}

/// Contact: channels and the collaboration call-to-action.
pub fn draw_contact(frame: &mut Frame, app: &App, area: Rect) {
    let latch = &app.reveals[Section::Contact.index()];
    let mut lines = header(
        "Get In Touch",
        Some("Let's build something amazing together"),
        latch,
    );

    let shown = staggered_visible(latch, content::CONTACT_CHANNELS.len(), STAGGER_TICKS);
    for channel in content::CONTACT_CHANNELS.iter().take(shown) {
        let mut spans = vec![
            Span::styled("▸ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}: ", channel.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(channel.value),
        ];
        if let Some(link) = channel.link {
            spans.push(Span::styled(
                format!("  {}", link),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if latch.is_visible() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Ready to Collaborate?",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(
            "Check out my projects on GitHub and let's create something incredible together!",
        ));
        lines.push(Line::from(Span::styled(
            format!("⌂ {}", content::PROFILE.github_url),
            Style::default().fg(Color::Cyan),
        )));
    }

    let contact = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.offset(), 0));
    frame.render_widget(contact, area);
}

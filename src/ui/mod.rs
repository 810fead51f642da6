// UI module for rendering the TUI.
// A navbar of sections on top, the active section below, a status bar and
// footer at the bottom, and a help overlay.

mod projects;
mod sections;

use chrono::{Datelike, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Section};
use crate::content;
use crate::state::{ConsoleLevel, RevealLatch};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(1),    // Active section
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_navbar(frame, app, chunks[0]);
    draw_section(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, chunks[3]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// How many of `count` staggered items the latch has revealed so far.
pub(crate) fn staggered_visible(latch: &RevealLatch, count: usize, ticks_per_item: u32) -> usize {
    if !latch.is_visible() {
        return 0;
    }
    if ticks_per_item == 0 {
        return count;
    }
    ((latch.age() / ticks_per_item) as usize + 1).min(count)
}

/// Draw the navbar: one entry per section, active one highlighted.
fn draw_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let style = if *section == app.active_section {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(section.title(), style))
        })
        .collect();

    // The bar tightens up once the section is scrolled, like a navbar
    // condensing on scroll.
    let border_style = if app.scroll.scrolled() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style)
                .title(format!(" {} ", content::PROFILE.initials))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(app.active_section.index())
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs, area);
}

/// Draw the active section's body.
fn draw_section(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_section {
        Section::Hero => sections::draw_hero(frame, app, area),
        Section::About => sections::draw_about(frame, app, area),
        Section::Skills => sections::draw_skills(frame, app, area),
        Section::Experience => sections::draw_experience(frame, app, area),
        Section::Projects => projects::draw_projects(frame, app, area),
        Section::Contact => sections::draw_contact(frame, app, area),
    }
}

/// Draw the status bar with keybinding hints, rate limit, and the latest
/// activity message.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Section", Style::default().fg(Color::DarkGray)),
        Span::raw("  1-6 "),
        Span::styled("Jump", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Retry", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(rate) = &app.rate_limit {
        let rate_color = if rate.remaining < 10 {
            Color::Red
        } else if rate.remaining < 100 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }

    if let Some(message) = app.latest_message() {
        let color = match message.level {
            ConsoleLevel::Info => Color::DarkGray,
            ConsoleLevel::Warn => Color::Yellow,
            ConsoleLevel::Error => Color::Red,
        };
        hints.push(Span::raw("  "));
        hints.push(Span::styled(message.message.clone(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the footer line.
fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = Utc::now().year();
    let footer = Line::from(vec![
        Span::styled(
            format!(" Made with ♥ by {}", content::PROFILE.name),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  © {} All rights reserved", year),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            content::PROFILE.github_url,
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 46;
    let popup_height = 13;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab / ← →   ", key_style),
            Span::raw("Switch section"),
        ]),
        Line::from(vec![
            Span::styled("  1-6         ", key_style),
            Span::raw("Jump to section"),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓ PgUp/Dn ", key_style),
            Span::raw("Scroll section"),
        ]),
        Line::from(vec![
            Span::styled("  Home        ", key_style),
            Span::raw("Scroll to top"),
        ]),
        Line::from(vec![
            Span::styled("  r           ", key_style),
            Span::raw("Retry loading projects"),
        ]),
        Line::from(vec![
            Span::styled("  ?           ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![Span::styled("  q           ", key_style), Span::raw("Quit")]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help, popup_area);
}

//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::engine::NotificationAccent;
use crate::tui::app::App;

/// Color palette for one theme.
struct Theme {
    bg: Color,
    fg: Color,
    muted: Color,
    accent: Color,
}

/// The light palette is the original cream scheme; dark is its inverse.
const fn theme(dark_mode: bool) -> Theme {
    if dark_mode {
        Theme {
            bg: Color::Rgb(25, 25, 28),
            fg: Color::Rgb(240, 240, 240),
            muted: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(100, 150, 200),
        }
    } else {
        Theme {
            bg: Color::Rgb(250, 245, 230),
            fg: Color::Rgb(70, 50, 30),
            muted: Color::Rgb(100, 80, 60),
            accent: Color::Rgb(180, 140, 100),
        }
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let theme = theme(app.settings().dark_mode);

    // Paint the themed background across the whole frame.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Layout: header, timer, settings, stats, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Timer
            Constraint::Length(6), // Settings
            Constraint::Length(1), // Stats
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, &theme, chunks[0]);
    render_timer(frame, app, &theme, chunks[1]);
    render_settings(frame, app, &theme, chunks[2]);
    render_stats(frame, app, &theme, chunks[3]);
    render_status_bar(frame, app, &theme, chunks[4]);

    if app.notification.is_some() {
        render_notification(frame, app, frame.area());
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, _app: &App, theme: &Theme, area: Rect) {
    let header = Paragraph::new(" tomatui — Pomodoro Timer ")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );

    frame.render_widget(header, area);
}

/// Render the clock, state label, and progress bar.
fn render_timer(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let snapshot = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // padding
            Constraint::Length(1), // clock
            Constraint::Length(1), // state
            Constraint::Length(1), // padding
            Constraint::Length(1), // gauge
            Constraint::Min(0),
        ])
        .split(area);

    let clock = Paragraph::new(format_clock(snapshot.remaining_seconds))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(clock, rows[1]);

    let state_style = if snapshot.state.is_paused() {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    };
    let state = Paragraph::new(snapshot.state.display_name())
        .alignment(Alignment::Center)
        .style(state_style);
    frame.render_widget(state, rows[2]);

    let gauge_area = centered_horizontal(rows[4], 60);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.bg))
        .percent(u16::from(snapshot.progress_percent))
        .label(format!("{}%", snapshot.progress_percent));
    frame.render_widget(gauge, gauge_area);
}

/// Render the duration sliders and toggles.
fn render_settings(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let settings = app.settings();

    let value_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(theme.muted);

    let lines = vec![
        Line::from(vec![
            Span::styled("Focus duration:  ", Style::default().fg(theme.fg)),
            Span::styled(format!("{:>2} min", settings.focus_minutes), value_style),
            Span::styled("  ←/→", key_style),
        ]),
        Line::from(vec![
            Span::styled("Break duration:  ", Style::default().fg(theme.fg)),
            Span::styled(format!("{:>2} min", settings.break_minutes), value_style),
            Span::styled("  ↓/↑", key_style),
        ]),
        Line::from(vec![
            Span::styled("Theme:           ", Style::default().fg(theme.fg)),
            Span::styled(
                if settings.dark_mode { "dark " } else { "light" },
                value_style,
            ),
            Span::styled("   d", key_style),
        ]),
        Line::from(vec![
            Span::styled("Sound:           ", Style::default().fg(theme.fg)),
            Span::styled(
                if settings.sound_enabled { "on   " } else { "off  " },
                value_style,
            ),
            Span::styled("   m", key_style),
        ]),
    ];

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .border_style(Style::default().fg(theme.muted)),
    );

    frame.render_widget(block, centered_horizontal(area, 40));
}

/// Render the completed-session counter.
fn render_stats(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let completed = app.snapshot().completed_sessions;
    let stats = Paragraph::new(format!("Sessions completed: {completed}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted));

    frame.render_widget(stats, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(theme.muted));

    frame.render_widget(status, area);
}

/// Render the interval-complete popup over the main UI.
fn render_notification(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(view) = app.notification.as_ref() else {
        return;
    };

    let accent = match view.accent {
        NotificationAccent::FocusComplete => Color::Rgb(100, 150, 200),
        NotificationAccent::BreakComplete => Color::Rgb(130, 170, 220),
    };

    let popup = centered_rect(area, 50, 8);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line<'_>> = vec![Line::raw("")];
    for row in view.message.lines() {
        lines.push(Line::from(Span::styled(
            row.to_string(),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::raw(""));

    if let Some(countdown) = app.notification_countdown() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", view.countdown_label, format_clock(countdown)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.title))
                .border_style(Style::default().fg(Color::White)),
        );

    frame.render_widget(dialog, popup);
}

/// Format whole seconds as MM:SS.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

/// A rect of the given size, centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A full-height horizontal slice of `area`, centered, `width` columns wide.
fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

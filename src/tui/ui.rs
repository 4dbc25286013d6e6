//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::notify::Level;
use crate::recipes::{Difficulty, Recipe, SortOrder, StepKind};
use crate::session::{
    format_mmss, overall_progress, remaining_secs, step_progress, timeline, Session, StepStatus,
};
use crate::tui::app::{App, Screen};
use crate::tui::event::{RECIPES_HELP, SESSION_HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let session = app.session();
    match app.screen {
        Screen::Recipes => render_recipes_screen(frame, app, &session),
        Screen::Session => render_session_screen(frame, app, &session),
    }
}

const fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_recipes_screen(frame: &mut Frame<'_>, app: &App, session: &Session) {
    let mini_player = app.mini_player_visible(session);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                               // Header
            Constraint::Min(0),                                  // List
            Constraint::Length(if mini_player { 3 } else { 0 }), // Mini-player
            Constraint::Length(1),                               // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    if mini_player {
        render_mini_player(frame, app, session, chunks[2]);
    }
    render_status_bar(frame, app, RECIPES_HELP, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let sort = match app.query.sort {
        SortOrder::Asc => "quickest first",
        SortOrder::Desc => "longest first",
    };
    let title = format!(
        " Recipes ({}) · difficulty: {} · {} ",
        app.visible().len(),
        app.filter_label(),
        sort
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the recipe list.
fn render_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .visible()
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| {
            let is_selected = i == app.selected;

            let mut spans = vec![
                Span::styled(
                    if recipe.is_favorite { "★ " } else { "☆ " },
                    Style::default().fg(if recipe.is_favorite {
                        Color::Yellow
                    } else {
                        Color::DarkGray
                    }),
                ),
                Span::styled(
                    recipe.title.as_str(),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {}", recipe.difficulty),
                    Style::default().fg(difficulty_color(recipe.difficulty)),
                ),
                Span::styled(
                    format!("  ⏱ {} mins", recipe.total_time_minutes),
                    Style::default().fg(Color::Cyan),
                ),
            ];

            if !recipe.cuisine.is_empty() {
                spans.push(Span::styled(
                    format!("  [{}]", recipe.cuisine),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the mini-player bar.
fn render_mini_player(frame: &mut Frame<'_>, app: &App, session: &Session, area: Rect) {
    let (Some(recipe), Some(active)) = (app.active_recipe(), session.active()) else {
        return;
    };
    let Some(step) = recipe.step(active.step_index) else {
        return;
    };

    let state = if active.paused { "⏸ Paused" } else { "▶ Cooking" };
    let label = format!(
        "{state} · {} · step {}/{} · {} left",
        recipe.title,
        active.step_index + 1,
        recipe.step_count(),
        format_mmss(remaining_secs(step, active.elapsed))
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(step_progress(step, active.elapsed))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_session_screen(frame: &mut Frame<'_>, app: &App, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Step gauge
            Constraint::Length(3), // Overall gauge
            Constraint::Length(5), // Current step
            Constraint::Min(0),    // Timeline
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let Some(recipe) = app.viewing_recipe() else {
        render_status_bar(frame, app, SESSION_HELP, chunks[5]);
        return;
    };
    let active = session.active().filter(|a| a.recipe_id == recipe.id);

    let star = if recipe.is_favorite { "★" } else { "☆" };
    let state = match active {
        Some(a) if a.paused => "Paused",
        Some(_) => "Cooking",
        None => "Not started (press c)",
    };
    let title = Paragraph::new(format!(" {star} {} · {state} ", recipe.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let (step_ratio, step_label) = active
        .and_then(|a| recipe.step(a.step_index).map(|step| (a, step)))
        .map_or((0.0, "--:--".to_string()), |(a, step)| {
            (
                step_progress(step, a.elapsed),
                format!("{} left", format_mmss(remaining_secs(step, a.elapsed))),
            )
        });
    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Step "))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(step_ratio)
            .label(step_label),
        chunks[1],
    );

    let overall = overall_progress(recipe, session);
    frame.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Overall "))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(overall)
            .label(format!("{:.0}%", overall * 100.0)),
        chunks[2],
    );

    render_current_step(frame, recipe, active.map_or(0, |a| a.step_index), chunks[3]);
    render_timeline(frame, recipe, session, chunks[4]);
    render_status_bar(frame, app, SESSION_HELP, chunks[5]);
}

/// Details of the step being cooked: settings or the ingredients it uses.
fn render_current_step(frame: &mut Frame<'_>, recipe: &Recipe, index: usize, area: Rect) {
    let Some(step) = recipe.step(index) else {
        return;
    };

    let detail = match &step.kind {
        StepKind::Cooking { settings } => Line::from(Span::styled(
            format!("🔥 {}°C · speed {}", settings.temperature, settings.speed),
            Style::default().fg(Color::Red),
        )),
        StepKind::Instruction { .. } => {
            let labels = recipe.step_ingredient_labels(step);
            if labels.is_empty() {
                Line::from("")
            } else {
                Line::from(Span::styled(
                    format!("Uses: {}", labels.join(", ")),
                    Style::default().fg(Color::Cyan),
                ))
            }
        }
    };

    let text = vec![
        Line::from(Span::styled(
            step.description.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        detail,
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Step {} of {} ", index + 1, recipe.step_count())),
        );

    frame.render_widget(paragraph, area);
}

fn render_timeline(frame: &mut Frame<'_>, recipe: &Recipe, session: &Session, area: Rect) {
    let items: Vec<ListItem<'_>> = recipe
        .steps
        .iter()
        .zip(timeline(recipe, session))
        .enumerate()
        .map(|(i, (step, status))| {
            let (icon, style) = match status {
                StepStatus::Done => ("✓", Style::default().fg(Color::Green)),
                StepStatus::Current => (
                    "▶",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                StepStatus::Upcoming => ("·", Style::default().fg(Color::DarkGray)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{icon} {}. ", i + 1), style),
                Span::styled(step.description.as_str(), style),
                Span::styled(
                    format!("  {} min", step.duration_minutes),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Steps "));
    frame.render_widget(list, area);
}

/// Render the status bar: a toast, a status message, or the key help.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, help: &str, area: Rect) {
    let status = if let Some(toast) = app.toast() {
        let color = match toast.level {
            Level::Info => Color::Cyan,
            Level::Success => Color::Green,
            Level::Warning => Color::Yellow,
        };
        Paragraph::new(toast.to_string()).style(Style::default().fg(color))
    } else {
        Paragraph::new(app.status.as_deref().unwrap_or(help).to_string())
            .style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(status, area);
}

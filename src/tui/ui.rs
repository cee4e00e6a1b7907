//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{GameView, Player, Position, Square};

use super::app::{App, Focus};
use crate::config::AppConfig;

/// Draws one frame: title, board, status, new-game hint and move list.
pub fn draw(frame: &mut Frame, app: &App, config: &AppConfig) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + info
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view, config);
    draw_info(frame, body[1], app, &view);

    let help = Paragraph::new(
        "arrows move | enter place | 1-9 place | tab moves list | n new game | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, config: &AppConfig) {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Yellow),
        Focus::Moves => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, view, config, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    config: &AppConfig,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, view, config, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    config: &AppConfig,
    pos: Position,
) {
    let (symbol, mut style) = match view.squares[pos.to_index()] {
        Square::Empty if *config.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg((*config.x_color()).into())
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg((*config.o_color()).into())
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning_line.is_some_and(|line| line.contains(&pos)) {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // New game
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let new_game = Paragraph::new(format!("[n] {}", view.new_game_label))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(new_game, chunks[1]);

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if entry.is_current { "* " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, entry.step + 1, entry.label),
                style,
            )))
        })
        .collect();

    let (border_style, highlight) = match app.focus() {
        Focus::Moves => (
            Style::default().fg(Color::Yellow),
            Style::default().bg(Color::White).fg(Color::Black),
        ),
        Focus::Board => (Style::default().fg(Color::DarkGray), Style::default()),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Moves")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(app.selected_step()));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

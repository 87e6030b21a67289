//! Terminal rendering of the surface.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect as Area},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::game::Position;
use crate::geometry::Rect;
use crate::view::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, CellView, TerminalSurface};

const HELP: &str = "arrows/click to pick, enter or 1-9 to play, r: new game, q: quit";

/// Draws the whole screen and records the board layout on the surface.
pub fn draw(frame: &mut Frame, surface: &mut TerminalSurface, cursor: Position, busy: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(frame.area());

    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(title_style)
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    let cells = cell_areas(board_area);
    surface.record_layout(to_rect(board_area), cells.map(to_rect));

    draw_grid(frame, board_area);
    for position in Position::ALL {
        let area = cells[position.to_index()];
        draw_cell(frame, area, surface.cell(position), position == cursor);
    }
    if let Some(line) = surface.win_line() {
        let start = line.start();
        let end = line.end();
        let width = f64::from(board_area.width);
        let height = f64::from(board_area.height);
        // Canvas y grows upward, surface y grows downward.
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                ctx.draw(&CanvasLine {
                    x1: *start.x(),
                    y1: height - *start.y(),
                    x2: *end.x(),
                    y2: height - *end.y(),
                    color: Color::Yellow,
                });
            });
        frame.render_widget(canvas, board_area);
    }

    let (text, color) = match surface.error() {
        Some(error) => (error.as_str(), Color::Red),
        None if busy => ("Waiting for the server...", Color::DarkGray),
        None => (surface.status().as_str(), Color::Yellow),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn to_rect(area: Area) -> Rect {
    Rect::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    )
}

fn cell_areas(board: Area) -> [Area; 9] {
    std::array::from_fn(|index| {
        let row = (index / 3) as u16;
        let col = (index % 3) as u16;
        Area::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

fn draw_grid(frame: &mut Frame, board: Area) {
    let style = Style::default().fg(Color::DarkGray);
    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Area::new(board.x, y, board.width, 1).intersection(board);
        let rule = Paragraph::new("─".repeat(usize::from(board.width))).style(style);
        frame.render_widget(rule, area);
    }
    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board.y + row * (CELL_HEIGHT + 1);
            let area = Area::new(x, y, 1, CELL_HEIGHT).intersection(board);
            frame.render_widget(Paragraph::new("│\n│\n│").style(style), area);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Area, cell: &CellView, selected: bool) {
    let base = match cell.class().as_deref() {
        Some("x") => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some("o") => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };
    let style = if selected {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    };

    let text = format!("   {}   ", cell.text());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Area, width: u16, height: u16) -> Area {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::game::Cell;
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

#[derive(Clone, Copy, PartialEq)]
enum Tile {
    Empty,
    Wall(char),
    Snake,
    Food,
    Obstacle,
}

pub fn draw_game(frame: &mut Frame, game: &Game, paused: bool) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("SNAKE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("SNAKE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 6).max(30)), // padding left of playfield
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, game, play_rect);
    draw_sidebar(frame, game, paused, cols[1]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![Tile::Empty; PLAY_W]; PLAY_H];

    // Border: corners, walls, floor.
    grid[0][0] = Tile::Wall('┌');
    grid[0][PLAY_W - 1] = Tile::Wall('┐');
    for x in 1..PLAY_W - 1 {
        grid[0][x] = Tile::Wall('─');
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = Tile::Wall('│');
        grid[y][PLAY_W - 1] = Tile::Wall('│');
    }
    grid[PLAY_H - 1][0] = Tile::Wall('└');
    grid[PLAY_H - 1][PLAY_W - 1] = Tile::Wall('┘');
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = Tile::Wall('─');
    }

    // Plot one board cell as a two-character block in the inner area.
    let plot_block = |grid: &mut [Vec<Tile>], cell: Cell, tile: Tile| {
        let (bx, by) = cell.grid_index();
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = tile;
            grid[gy][gx + 1] = tile;
        }
    };

    // Fresh grid every frame; snake, then food, then obstacles. Later
    // plots win on overlap, which only affects the visuals.
    for cell in game.snake.cells() {
        plot_block(&mut grid, cell, Tile::Snake);
    }
    plot_block(&mut grid, game.food, Tile::Food);
    for &cell in &game.obstacles {
        plot_block(&mut grid, cell, Tile::Obstacle);
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::from(row.iter().map(tile_span).collect::<Vec<_>>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

fn tile_span(tile: &Tile) -> Span<'static> {
    match tile {
        Tile::Empty => Span::raw(" "),
        Tile::Wall(ch) => Span::raw(ch.to_string()),
        Tile::Snake => Span::styled("█", Style::default().fg(Color::Green)),
        Tile::Food => Span::styled("█", Style::default().fg(Color::Red)),
        Tile::Obstacle => Span::styled("█", Style::default().fg(Color::DarkGray)),
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, paused: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(5), Constraint::Length(8)].as_ref())
        .split(area);

    let status = if paused {
        "PAUSED"
    } else if game.is_moving() {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        if (millis / 300) % 2 == 0 {
            "MOVING"
        } else {
            "      "
        }
    } else {
        "IDLE"
    };

    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nLENGTH\n{}\n\nSTATUS\n{}",
        game.score,
        game.snake.len(),
        status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("↑↓←→ steer\np pause\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

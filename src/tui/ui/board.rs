//! Five-in-a-row board rendering and hit-testing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strictly_gomoku::{Player, Position, Square, BOARD_SIZE};

use crate::tui::app::App;

/// Columns each cell takes up.
const CELL_WIDTH: u16 = 3;
/// Columns taken by the row labels.
const LABEL_WIDTH: u16 = 3;

/// Outer size of the bordered board, labels included when shown.
pub fn board_size(show_coordinates: bool) -> (u16, u16) {
    let (label_w, label_h) = label_offsets(show_coordinates);
    let cells = BOARD_SIZE as u16;
    (label_w + cells * CELL_WIDTH + 2, label_h + cells + 2)
}

fn label_offsets(show_coordinates: bool) -> (u16, u16) {
    if show_coordinates {
        (LABEL_WIDTH, 1)
    } else {
        (0, 0)
    }
}

/// Renders the board into `board_area`, which must come from
/// [`super::board_rect`].
pub fn render_board(f: &mut Frame, board_area: Rect, app: &App) {
    let game = app.game();
    let board = game.board();
    let mut lines = Vec::with_capacity(BOARD_SIZE + 1);

    if app.show_coordinates() {
        let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH as usize))];
        header.extend((0..BOARD_SIZE).map(|col| {
            Span::styled(format!(" {} ", col), Style::default().fg(Color::DarkGray))
        }));
        lines.push(Line::from(header));
    }

    for (row, squares) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(BOARD_SIZE + 1);
        if app.show_coordinates() {
            spans.push(Span::styled(
                format!("{:>2} ", row),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for (col, square) in squares.iter().enumerate() {
            let Some(pos) = Position::new(row, col) else {
                continue;
            };
            spans.push(render_square(*square, cell_style(app, pos, *square)));
        }
        lines.push(Line::from(spans));
    }

    let title = match game.win_line() {
        Some(line) => format!("Board - {} line", line.axis()),
        None => "Board".to_string(),
    };
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, board_area);
}

fn render_square(square: Square, style: Style) -> Span<'static> {
    let text = match square {
        Square::Empty => " · ".to_string(),
        Square::Occupied(player) => format!(" {} ", player.symbol()),
    };
    Span::styled(text, style)
}

fn cell_style(app: &App, pos: Position, square: Square) -> Style {
    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red),
    };
    if square != Square::Empty {
        style = style.add_modifier(Modifier::BOLD);
    }

    if app.game().win_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green);
    }
    if pos == app.cursor() && !app.game().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }
    style
}

/// Maps a terminal cell to the board cell under it.
///
/// Returns `None` for the border, the labels, and anything outside
/// `board_area`.
pub fn cell_at(board_area: Rect, show_coordinates: bool, x: u16, y: u16) -> Option<Position> {
    let (label_w, label_h) = label_offsets(show_coordinates);
    let left = board_area.x + 1 + label_w;
    let top = board_area.y + 1 + label_h;

    if x < left || y < top {
        return None;
    }
    let col = ((x - left) / CELL_WIDTH) as usize;
    let row = (y - top) as usize;

    // Clicks past the right or bottom border land outside the grid.
    if x >= board_area.x + board_area.width.saturating_sub(1)
        || y >= board_area.y + board_area.height.saturating_sub(1)
    {
        return None;
    }
    Position::new(row, col)
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

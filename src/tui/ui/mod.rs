//! UI rendering using ratatui.

mod board;

use super::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::rc::Rc;

pub use board::{board_size, cell_at, center_rect, render_board};

fn main_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area)
}

/// Where the bordered board lands inside a terminal of size `area`.
pub fn board_rect(area: Rect, show_coordinates: bool) -> Rect {
    let (width, height) = board_size(show_coordinates);
    center_rect(main_chunks(area)[1], width, height)
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = main_chunks(f.area());

    let title = Paragraph::new("Strictly Five")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, board_rect(f.area(), app.show_coordinates()), app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Click or Enter: place | Arrows/hjkl: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if let Some(text) = app.announcement() {
        render_announcement(f, text);
    }
}

fn render_announcement(f: &mut Frame, text: &str) {
    let area = center_rect(f.area(), 30, 5);
    let popup = Paragraph::new(vec![
        Line::from(text),
        Line::default(),
        Line::from("press any key"),
    ])
    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game Over"));
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use strictly_gomoku::Position;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 30;

    fn area() -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(app: &App) -> String {
        let buffer = render(app);
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_title_and_status() {
        let app = App::new(true);
        let text = screen(&app);
        assert!(text.contains("Strictly Five"));
        assert!(text.contains("Player X's turn"));
    }

    fn top_row_win() -> App {
        let mut app = App::new(true);
        for col in 0..4 {
            app.click(Position::new(0, col).unwrap());
            app.click(Position::new(9, col).unwrap());
        }
        app.click(Position::new(0, 4).unwrap());
        app
    }

    /// Terminal cell holding the mark at `(row, col)`.
    fn mark_cell(row: u16, col: u16) -> (u16, u16) {
        let rect = board_rect(area(), true);
        (rect.x + 1 + 3 + 3 * col + 1, rect.y + 1 + 1 + row)
    }

    #[test]
    fn test_draws_winner_popup() {
        let app = top_row_win();

        let text = screen(&app);
        assert!(text.contains("X is winner!"));
        assert!(text.contains("horizontal line"));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let buffer = render(&top_row_win());

        for col in 0..5 {
            let cell = &buffer[mark_cell(0, col)];
            assert_eq!(cell.symbol(), "X");
            assert_eq!(cell.bg, Color::Green, "column {col}");
        }
        let off_line = &buffer[mark_cell(0, 5)];
        assert_ne!(off_line.bg, Color::Green);
        let loser = &buffer[mark_cell(9, 0)];
        assert_eq!(loser.symbol(), "O");
        assert_ne!(loser.bg, Color::Green);
    }

    #[test]
    fn test_click_maps_back_to_rendered_cell() {
        let rect = board_rect(area(), true);
        // Label column plus border, then three columns per cell.
        let x = rect.x + 1 + 3 + 3 * 7 + 1;
        let y = rect.y + 1 + 1 + 2;
        assert_eq!(cell_at(rect, true, x, y), Position::new(2, 7));
    }
}

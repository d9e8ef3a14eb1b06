use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Cell, Game};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    // Two characters per cell plus borders
    let board_height = game.board().height() as u16 + 2;
    let board_width = game.board().width() as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_controls(f, info_area);

    if game.is_game_over() {
        render_game_over_overlay(f, board_area);
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut render_board = game.board().clone();

    // The piece stays visible after game over, overlapping the stack it spawned into
    let piece = game.current_piece();
    for (x, y) in piece.get_blocks() {
        render_board.set(x, y, Cell::Filled(piece.piece_type));
    }

    let board_lines: Vec<Line> = render_board
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Cell::Empty => {
                        if (x + y) % 2 == 0 {
                            Span::styled("░░", Style::default().fg(Color::DarkGray))
                        } else {
                            Span::raw("  ")
                        }
                    }
                    Cell::Filled(piece_type) => {
                        Span::styled("██", Style::default().fg(piece_type.color()))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let controls_text = vec![
        Line::from(vec![Span::raw("← →  move")]),
        Line::from(vec![Span::raw("↑    rotate")]),
        Line::from(vec![Span::raw("↓    drop")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R    restart")]),
        Line::from(vec![Span::raw("Q    quit")]),
    ];

    let controls_widget = Paragraph::new(controls_text)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    f.render_widget(controls_widget, chunks[0]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 30, area);
    f.render_widget(Clear, popup_area);

    let game_over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
        Line::from(vec![Span::raw("Q to quit")]),
    ];

    let game_over_widget = Paragraph::new(game_over_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CollisionType, GameSnapshot, KeyLayout, Position};
use crate::metrics::{GameMetrics, GameOverSummary};

pub struct Renderer {
    layout: KeyLayout,
}

impl Renderer {
    pub fn new(layout: KeyLayout) -> Self {
        Self { layout }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &GameSnapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Status
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let status = self.render_status(chunks[1], snapshot, metrics);
        frame.render_widget(status, chunks[1]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[2])[1];

        let grid = self.render_grid(game_area, snapshot);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls(chunks[3]);
        frame.render_widget(controls, chunks[3]);
    }

    fn render_grid(&self, _area: Rect, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let mut lines = Vec::new();
        let head = snapshot.head();

        for y in 0..snapshot.board_size {
            let mut spans = Vec::new();

            for x in 0..snapshot.board_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border = if snapshot.is_running() {
            Color::White
        } else {
            Color::DarkGray
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Best Score: ", label),
            Span::styled(
                snapshot.best_score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", snapshot.speed_ms), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_status(
        &self,
        _area: Rect,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let line = if snapshot.is_running() {
            Line::from("")
        } else if let Some(summary) = metrics.last_game {
            game_over_line(summary)
        } else if metrics.is_game_in_progress() {
            Line::from(Span::styled(
                "PAUSED | press Space to resume",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                "Press Space to start",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let letters = match self.layout {
            KeyLayout::Wasd => "WASD",
            KeyLayout::Zqsd => "ZQSD",
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled(letters, Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" to start | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn game_over_line(summary: GameOverSummary) -> Line<'static> {
    let cause = match summary.collision {
        CollisionType::Wall => "hit the wall",
        CollisionType::SelfCollision => "bit itself",
    };

    let mut spans = vec![
        Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | snake {cause} | final score {}", summary.score),
            Style::default().fg(Color::Gray),
        ),
    ];

    if summary.new_record {
        spans.push(Span::styled(
            " | NEW BEST!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        " | press Space to play again",
        Style::default().fg(Color::Gray),
    ));

    Line::from(spans)
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(KeyLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, PlayState};
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot(play_state: PlayState, score: u32) -> GameSnapshot {
        GameSnapshot {
            snake: vec![Position::new(10, 10), Position::new(9, 10)],
            food: Position::new(3, 3),
            direction: Direction::Right,
            score,
            best_score: 120,
            speed_ms: 90,
            play_state,
            board_size: 30,
        }
    }

    fn draw(snapshot: &GameSnapshot, metrics: &GameMetrics) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
        let renderer = Renderer::default();
        terminal
            .draw(|frame| renderer.render(frame, snapshot, metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_and_prompt() {
        let screen = draw(&snapshot(PlayState::Paused, 0), &GameMetrics::new());
        assert!(screen.contains("Best Score: 120"));
        assert!(screen.contains("Speed: 90ms"));
        assert!(screen.contains("Press Space to start"));
        assert!(screen.contains("■"));
        assert!(screen.contains("O"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut metrics = GameMetrics::new();
        metrics.last_game = Some(GameOverSummary {
            collision: CollisionType::Wall,
            score: 150,
            new_record: true,
        });

        let screen = draw(&snapshot(PlayState::Paused, 0), &metrics);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("final score 150"));
        assert!(screen.contains("NEW BEST!"));
    }

    #[test]
    fn test_paused_before_first_food() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_pause();

        let screen = draw(&snapshot(PlayState::Paused, 0), &metrics);
        assert!(screen.contains("PAUSED"));
        assert!(!screen.contains("Press Space to start"));
    }

    #[test]
    fn test_running_has_no_banner() {
        let screen = draw(&snapshot(PlayState::Running, 40), &GameMetrics::new());
        assert!(!screen.contains("Press Space to start"));
        assert!(!screen.contains("PAUSED"));
        assert!(screen.contains("Score: 40"));
    }
}

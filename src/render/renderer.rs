use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::sprite::{Axis, Corner, SegmentSprite, snake_sprites};
use crate::game::{Direction, GameState, Position};
use crate::metrics::GameMetrics;

/// Draws read-only snapshots of the game into a ratatui frame
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        let mut sprites: HashMap<Position, SegmentSprite> = HashMap::new();
        for (pos, sprite) in snake_sprites(state) {
            sprites.entry(pos).or_insert(sprite);
        }
        let head = state.snake.body.first().copied();

        let lines: Vec<Line> = (0..state.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width)
                    .map(|x| {
                        let pos = Position::new(x as i32, y as i32);
                        match sprites.get(&pos) {
                            Some(sprite) => {
                                segment_span(*sprite, Some(pos) == head, state.is_game_over())
                            }
                            None if pos == state.food => Span::styled(
                                "● ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            ),
                            None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-column glyph for a segment sprite. The second column carries the
/// horizontal link into the cell on the right.
pub fn sprite_glyph(sprite: SegmentSprite) -> &'static str {
    match sprite {
        SegmentSprite::Head(Direction::Up) => "▲ ",
        SegmentSprite::Head(Direction::Down) => "▼ ",
        SegmentSprite::Head(Direction::Left) => "◀━",
        SegmentSprite::Head(Direction::Right) => "▶ ",
        SegmentSprite::Straight(Axis::Horizontal) => "━━",
        SegmentSprite::Straight(Axis::Vertical) => "┃ ",
        SegmentSprite::Corner(Corner::UpLeft) => "┛ ",
        SegmentSprite::Corner(Corner::UpRight) => "┗━",
        SegmentSprite::Corner(Corner::DownLeft) => "┓ ",
        SegmentSprite::Corner(Corner::DownRight) => "┏━",
        SegmentSprite::Tail(Direction::Up) => "╻ ",
        SegmentSprite::Tail(Direction::Down) => "╹ ",
        SegmentSprite::Tail(Direction::Left) => "╺━",
        SegmentSprite::Tail(Direction::Right) => "╸ ",
        SegmentSprite::Overlap => "✖ ",
    }
}

fn segment_span(sprite: SegmentSprite, is_head: bool, crashed: bool) -> Span<'static> {
    let style = if crashed && is_head {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if is_head {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    Span::styled(sprite_glyph(sprite), style)
}

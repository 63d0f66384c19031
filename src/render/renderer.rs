use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashSet;

use crate::app::View;
use crate::game::{Difficulty, Position, Session};
use crate::screen::{NameEntry, Screen, Standings, StartMenu};

const MIN_PANEL_WIDTH: u16 = 40;
const MIN_PANEL_HEIGHT: u16 = 12;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &View<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        if let Some(session) = view.session {
            frame.render_widget(self.render_stats(session), chunks[0]);
        }

        let area = self.board_area(chunks[1], view);

        let body = match view.screen {
            Screen::StartMenu(menu) => self.render_start_menu(menu),
            Screen::Playing { .. } => match view.session {
                Some(session) => self.render_grid(session),
                None => Paragraph::new(""),
            },
            Screen::ExitConfirm => self.render_exit_confirm(),
            Screen::GameOver => self.render_game_over(view.session),
            Screen::EnterName(entry) => self.render_name_entry(entry, view.session),
            Screen::Highscores(standings) => self.render_highscores(standings),
        };
        frame.render_widget(body, area);

        frame.render_widget(self.render_controls(view.screen), chunks[2]);
    }

    /// Centre a box big enough for the board, two columns per cell plus borders.
    /// Menus on tiny boards still get room for their text.
    fn board_area(&self, area: Rect, view: &View<'_>) -> Rect {
        let width = (view.config.grid_width as u16)
            .saturating_mul(2)
            .saturating_add(2)
            .max(MIN_PANEL_WIDTH);
        let height = (view.config.grid_height as u16)
            .saturating_add(2)
            .max(MIN_PANEL_HEIGHT);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, cell, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);
        cell
    }

    fn render_grid(&self, session: &Session) -> Paragraph<'_> {
        let grid = session.world.grid();
        let head = session.snake.head();
        let body: HashSet<Position> = session.snake.body().skip(1).collect();
        let apple = session.world.apple();

        let mut lines = Vec::with_capacity(grid.height);

        for y in 0..grid.height {
            let mut spans = Vec::with_capacity(grid.width);

            for x in 0..grid.width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == apple {
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

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Sneeky ")
                .title_alignment(Alignment::Center),
        )
    }

    fn render_stats(&self, session: &Session) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.player.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.difficulty.label(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_menu(&self, menu: &StartMenu) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select difficulty",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for difficulty in Difficulty::ALL {
            let line = if difficulty == menu.selected() {
                Line::from(Span::styled(
                    format!("[{}]", difficulty.label()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!(" {} ", difficulty.label()),
                    Style::default().fg(Color::Gray),
                ))
            };
            text.push(line);
        }

        self.panel(text, Color::White)
    }

    fn render_exit_confirm(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit?",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("Enter", key_style(Color::Green)),
                Span::styled(" to resume,", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("Q", key_style(Color::Red)),
                Span::styled(" to quit or ", Style::default().fg(Color::Gray)),
                Span::styled("Backspace", key_style(Color::Yellow)),
                Span::styled(" for the menu", Style::default().fg(Color::Gray)),
            ]),
        ];

        self.panel(text, Color::Red)
    }

    fn render_game_over(&self, session: Option<&Session>) -> Paragraph<'_> {
        let score = session.map_or(0, |s| s.player.score);
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("Enter", key_style(Color::Green)),
                Span::styled(" to save your score", Style::default().fg(Color::Gray)),
            ]),
        ];

        self.panel(text, Color::Red)
    }

    fn render_name_entry<'a>(
        &self,
        entry: &'a NameEntry,
        session: Option<&Session>,
    ) -> Paragraph<'a> {
        let score = session.map_or(0, |s| s.player.score);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Enter name",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    entry.buffer(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("_", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Score: {}", score),
                Style::default().fg(Color::Yellow),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_highscores(&self, standings: &Standings) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Highscores",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if !standings.is_available() {
            text.push(Line::from(Span::styled(
                "(highscores unavailable)",
                Style::default().fg(Color::Red),
            )));
        }

        text.extend(
            standings
                .lines()
                .into_iter()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White)))),
        );

        self.panel(text, Color::White)
    }

    fn render_controls(&self, screen: &Screen) -> Paragraph<'_> {
        let spans = match screen {
            Screen::StartMenu(_) => vec![
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" to choose | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ],
            Screen::Playing { .. } => vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ],
            Screen::EnterName(_) => vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to save | "),
                Span::styled("Backspace", Style::default().fg(Color::Yellow)),
                Span::raw(" to erase"),
            ],
            Screen::Highscores(_) => vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to continue"),
            ],
            Screen::ExitConfirm | Screen::GameOver => Vec::new(),
        };

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn panel<'a>(&self, text: Vec<Line<'a>>, border: Color) -> Paragraph<'a> {
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn key_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

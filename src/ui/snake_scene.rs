//! Play-screen rendering.
//!
//! Uses half-block pixel rendering. Each grid cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

use super::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use crate::core::error::{GameError, Result};
use crate::core::game_loop::RenderSink;
use crate::snake::snapshot::Snapshot;
use crate::snake::types::{Grid, Position};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Palette ──────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const OBSTACLE_COLOR: Color = Color::Rgb(200, 0, 0);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(20, 20, 20);
const FRAME_COLOR: Color = Color::Rgb(80, 80, 80);

const INFO_PANEL_WIDTH: u16 = 22;
const CONTENT_MIN_WIDTH: u16 = 20;
const CONTENT_MIN_HEIGHT: u16 = 14;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Smallest terminal (width, height) that shows every cell of `grid`.
///
/// The play field is two border rows plus one row per pair of grid rows, and
/// the grid width plus two border columns.
pub fn required_terminal_size(grid: Grid) -> (u16, u16) {
    let field_w = grid.width.max(0) as u16 + 2;
    let field_h = (grid.height.max(0) as u16).div_ceil(2) + 2;
    let width = 2 + field_w.max(CONTENT_MIN_WIDTH) + INFO_PANEL_WIDTH;
    let height = 2 + field_h.max(CONTENT_MIN_HEIGHT) + STATUS_BAR_HEIGHT;
    (width, height)
}

/// Reject a grid the play screen would have to clip in `area`.
pub fn ensure_grid_fits(grid: Grid, area: Rect) -> Result<()> {
    let (width, height) = required_terminal_size(grid);
    if area.width < width || area.height < height {
        return Err(GameError::Config(format!(
            "grid {}x{} needs a {}x{} terminal, this one is {}x{}",
            grid.width, grid.height, width, height, area.width, area.height
        )));
    }
    Ok(())
}

/// Render the whole play screen for one frame.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let title = format!(" Snake - {} ", snap.difficulty);
    let layout = create_game_layout(
        frame,
        area,
        &title,
        Color::LightGreen,
        CONTENT_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, snap);
    render_status_bar_content(frame, layout.status_bar, snap);
    render_info_panel(frame, layout.info_panel, snap);

    if snap.game_over {
        render_banner(
            frame,
            layout.content,
            Color::Red,
            "GAME OVER",
            &format!("Score {} / length {}", snap.score, snap.length),
            "[M] Menu  [Q] Quit",
        );
    } else if snap.paused {
        let message = match snap.lives {
            Some(lives) => format!("{} {} left", lives, if lives == 1 { "life" } else { "lives" }),
            None => "Take a breath".to_string(),
        };
        render_banner(
            frame,
            layout.content,
            Color::Yellow,
            "PAUSED",
            &message,
            "[P] Resume  [M] Menu",
        );
    }
}

/// Interpolated color for body segment `index` of a snake `snake_len` long.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Color every cell of the grid, row-major. `None` is an empty cell.
fn build_pixels(snap: &Snapshot) -> Vec<Vec<Option<Color>>> {
    let grid_w = snap.grid.width.max(0) as usize;
    let grid_h = snap.grid.height.max(0) as usize;
    let mut pixels = vec![vec![None; grid_w]; grid_h];

    let mut paint = |x: i16, y: i16, color: Color| {
        if snap.grid.contains(Position::new(x, y)) {
            pixels[y as usize][x as usize] = Some(color);
        }
    };

    paint(snap.food.x, snap.food.y, FOOD_COLOR);
    for obstacle in &snap.obstacles {
        paint(obstacle.x, obstacle.y, OBSTACLE_COLOR);
    }
    // Tail first so the head wins where stacked segments overlap
    for (i, seg) in snap.body.iter().enumerate().rev() {
        let color = if i == 0 {
            HEAD_COLOR
        } else {
            body_color(i, snap.body.len())
        };
        paint(seg.x, seg.y, color);
    }

    pixels
}

fn horizontal_rule(n: usize) -> String {
    BORDER_H.to_string().repeat(n)
}

fn render_play_field(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let pixels = build_pixels(snap);
    let grid_w = pixels.first().map_or(0, Vec::len);
    let grid_h = pixels.len();

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border = Style::default().fg(FRAME_COLOR);

    // Top border with score
    {
        let score_val = snap.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let spans = vec![
            Span::styled(BORDER_TL.to_string(), border),
            Span::styled(horizontal_rule(pad_before), border),
            Span::styled(label, border),
            Span::styled(score_val, Style::default().fg(Color::White)),
            Span::styled(horizontal_rule(pad_after), border),
            Span::styled(BORDER_TR.to_string(), border),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // Grid rows, two per terminal row
    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

        // Batch consecutive cells with the same colors into one span
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for (x, (&top_c, &bot_c)) in top_row.iter().zip(bot_row.iter()).enumerate() {
            if x >= inner_w {
                break;
            }
            let fg = top_c.unwrap_or(EMPTY_BG);
            // Odd grid heights leave the last half-row blank
            let bg = if term_row * 2 + 1 < grid_h {
                bot_c.unwrap_or(EMPTY_BG)
            } else {
                Color::Reset
            };
            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }
        spans.push(Span::styled(BORDER_V.to_string(), border));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let line = format!("{}{}{}", BORDER_BL, horizontal_rule(inner_w), BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(line, border))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    if snap.game_over {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[M]", "Menu"), ("[Q]", "Quit")],
        );
    } else if snap.paused {
        render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[Arrows]", "Aim"), ("[P]", "Resume"), ("[M]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[P]", "Pause"), ("[M]", "Menu")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", label),
            Span::styled(snap.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snap.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(snap.length.to_string(), value),
        ]),
    ];

    if let Some(lives) = snap.lives {
        lines.push(Line::from(vec![
            Span::styled("Lives: ", label),
            Span::styled(
                "\u{2665} ".repeat(lives as usize),
                Style::default().fg(Color::Red),
            ),
        ]));
    }

    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", label),
            Span::styled(format!("{}x{}", snap.grid.width, snap.grid.height), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", snap.tick_interval_ms), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(HEAD_COLOR, "Head"),
        legend_line(
            Color::Rgb(
                BODY_BRIGHT.0 as u8,
                BODY_BRIGHT.1 as u8,
                BODY_BRIGHT.2 as u8,
            ),
            "Body",
        ),
        legend_line(FOOD_COLOR, "Food"),
        legend_line(OBSTACLE_COLOR, "Obstacle"),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(color: Color, name: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}

/// Draws every snapshot onto a ratatui terminal.
pub struct TerminalSink<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TerminalSink<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> RenderSink for TerminalSink<'_, B> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_snake_scene(frame, area, snapshot);
        })?;
        Ok(())
    }
}

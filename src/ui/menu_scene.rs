//! Splash, menu, best-score and tutorial screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::game_common::centered_rect;
use crate::menu::{MenuState, TUTORIAL_LINES};
use crate::scores::BestScores;

const MENU_WIDTH: u16 = 32;

pub fn render_splash(frame: &mut Frame, area: Rect, version: &str) {
    frame.render_widget(Clear, area);
    let box_area = centered_rect(area, 40, 7);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Snake Game",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(version, Style::default().fg(Color::DarkGray))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        box_area,
    );
}

/// Render a titled list menu with the cursor on `menu.selected_index`.
pub fn render_menu(frame: &mut Frame, area: Rect, title: &str, items: &[&str], menu: &MenuState) {
    frame.render_widget(Clear, area);

    let height = items.len() as u16 + 4;
    let box_area = centered_rect(area, MENU_WIDTH, height);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let selected = i == menu.selected_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}. {}", prefix, i + 1, label)).style(style)
        })
        .collect();
    frame.render_widget(List::new(list_items), inner);

    if inner.height > items.len() as u16 + 1 {
        let help_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let help = Paragraph::new("[↑/↓] Move  [Enter] Pick")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}

pub fn render_best_scores(frame: &mut Frame, area: Rect, scores: &BestScores) {
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = scores
        .rows()
        .into_iter()
        .map(|(difficulty, score)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<8}", difficulty.name()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:>6} points", score),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key]",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Best Scores ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        centered_rect(area, MENU_WIDTH, 8),
    );
}

pub fn render_tutorial(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = TUTORIAL_LINES
        .iter()
        .map(|&text| {
            let style = if text.ends_with(':') {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key]",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Tutorial ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(
        Paragraph::new(lines).block(block),
        centered_rect(area, 56, TUTORIAL_LINES.len() as u16 + 4),
    );
}

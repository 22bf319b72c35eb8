pub mod cards;

use crate::ui::app::App;
use cards::card_view;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

pub const CARD_HEIGHT: u16 = 8;
pub const MIN_CARD_WIDTH: u16 = 36;
const MAX_COLUMNS: usize = 4;

pub fn columns_for(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

/// Range of block indices visible in a grid of `columns` x `visible_rows`,
/// scrolled so that `selected` is on screen.
pub fn grid_window(count: usize, columns: usize, visible_rows: usize, selected: usize) -> Range<usize> {
    if count == 0 || columns == 0 || visible_rows == 0 {
        return 0..0;
    }
    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let start = first_row * columns;
    let end = (start + visible_rows * columns).min(count);
    start..end
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(3),
    ])
    .split(frame.area());

    draw_status(frame, chunks[0], app);
    draw_blocks(frame, chunks[1], app);
    draw_prompt(frame, chunks[2], app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " thoughtspace ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.is_generating() {
        spans.push(Span::styled(
            " generating… ",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(query) = app.canvas().last_query() {
        spans.push(Span::styled(
            format!(" last: {} ", query),
            Style::default().fg(Color::Gray),
        ));
    }
    spans.push(Span::styled(
        format!(" {} blocks ", app.canvas().len()),
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(status) = app.status() {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::LightRed),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_blocks(frame: &mut Frame, area: Rect, app: &App) {
    let blocks = app.canvas().blocks();

    if blocks.is_empty() {
        let help = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Type a prompt and press Enter",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Mention video, tutorial, trending, news... to pull in more sources"),
            Line::from(""),
            Line::from("  ↑/↓ Tab - Select block"),
            Line::from("  Del - Remove selected block"),
            Line::from("  Ctrl-L - Clear canvas"),
            Line::from("  Esc - Quit"),
        ];
        let paragraph = Paragraph::new(help)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" canvas "));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = columns_for(area.width);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let window = grid_window(blocks.len(), columns, visible_rows, app.selected());
    let card_width = area.width / columns as u16;

    for (slot, index) in window.enumerate() {
        let row = (slot / columns) as u16;
        let col = (slot % columns) as u16;
        let card_area = Rect::new(
            area.x + col * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
        );
        if card_area.height < 3 {
            continue;
        }

        let block = &blocks[index];
        let view = card_view(block, card_width.saturating_sub(2) as usize);
        let selected = index == app.selected();
        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(view.accent)
        };

        let card = Paragraph::new(view.lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(view.title),
        );
        frame.render_widget(card, card_area);
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.is_generating() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(app.input().to_string()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Ask anything "),
    );
    frame.render_widget(prompt, area);

    let cursor_x = area.x + 3 + app.input().chars().count() as u16;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

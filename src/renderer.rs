use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BORDER_HALF_BLOCK, CELL_COLUMNS, GLYPH_CELL, PALETTE};
use crate::game::GameState;
use crate::grid::{Cell, GridWorld};
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [hud_area, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_hud(frame, hud_area, state);

    let needed = required_size(state.world());
    if frame.area().width < needed.width || frame.area().height < needed.height {
        render_too_small(frame, board_area, needed);
        return;
    }

    let play_area = board_rect(board_area, state.world());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(PALETTE.border_fg))
        .style(Style::new().bg(PALETTE.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if state.is_game_over() {
        render_game_over_menu(frame, board_area, state.score(), state.end_reason);
        return;
    }

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

/// Terminal size needed to show the HUD and the whole bordered board.
#[must_use]
pub fn required_size(world: &GridWorld) -> Size {
    let (board_width, board_height) = board_extent(world);
    Size::new(board_width, board_height.saturating_add(1))
}

fn board_extent(world: &GridWorld) -> (u16, u16) {
    let size = world.size();
    (
        size.width.saturating_mul(CELL_COLUMNS).saturating_add(2),
        size.height.saturating_add(2),
    )
}

/// Bordered board rectangle centered in `area`.
fn board_rect(area: Rect, world: &GridWorld) -> Rect {
    let (width, height) = board_extent(world);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed: Size) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {}x{}", needed.width, needed.height)),
    ];
    let [row] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.menu_title)),
        row,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = cell_to_terminal(inner, state.world(), state.food_cell()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if segments ever overlap on screen.
    let segments: Vec<Cell> = state.body().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, state.world(), *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(PALETTE.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(PALETTE.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a grid cell to the top-left terminal column/row of its block.
fn cell_to_terminal(inner: Rect, world: &GridWorld, cell: Cell) -> Option<(u16, u16)> {
    if !world.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

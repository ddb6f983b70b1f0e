use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::controller::REVEAL_STEPS;
use crate::state::{
    AlertState, ButtonFocus, ConfirmState, ItemVisual, PromptState, SelectState,
};
use crate::text::wrap_lines;

const POPUP_BG: Color = Color::Rgb(36, 36, 36);
const ENTRY_BG: Color = Color::Rgb(51, 51, 51);
const SELECTION_BG: Color = Color::Rgb(59, 142, 208);
const FOCUS_BG: Color = Color::Rgb(74, 74, 74);
const TEXT_FG: Color = Color::Rgb(220, 220, 220);
const HINT_FG: Color = Color::Rgb(128, 128, 128);
const BORDER_FG: Color = Color::Rgb(96, 96, 96);

const MIN_POPUP_WIDTH: u16 = 50;
const MAX_CONTENT_WIDTH: u16 = 72;

const PROMPT_PLACEHOLDER: &str = "Enter your required input here...";

/// Scale a color toward black for the reveal animation. At the final step
/// colors pass through unchanged.
pub(crate) fn fade(color: Color, step: u8) -> Color {
    let step = step.min(REVEAL_STEPS);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            scale_channel(r, step),
            scale_channel(g, step),
            scale_channel(b, step),
        ),
        other => other,
    }
}

fn scale_channel(channel: u8, step: u8) -> u8 {
    (u16::from(channel) * u16::from(step) / u16::from(REVEAL_STEPS)) as u8
}

/// Center a popup of the given size in `area`, clamping to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Wrap budget for dialog content given the terminal width.
fn content_width(area: Rect) -> u16 {
    area.width
        .saturating_sub(6)
        .min(MAX_CONTENT_WIDTH)
        .max(20)
}

fn style(fg: Color, step: u8) -> Style {
    Style::default().fg(fade(fg, step)).bg(fade(POPUP_BG, step))
}

fn message_lines(message: &str, width: u16, step: u8) -> Vec<Line<'static>> {
    wrap_lines(message, width as usize)
        .into_iter()
        .map(|line| Line::styled(line, style(TEXT_FG, step)))
        .collect()
}

fn hint_line(hint: &str, step: u8) -> Line<'static> {
    Line::styled(hint.to_string(), style(HINT_FG, step).add_modifier(Modifier::DIM))
}

fn render_popup(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>, step: u8) {
    let area = frame.area();
    let widest = lines.iter().map(|line| line.width() as u16).max().unwrap_or(0);
    let width = (widest + 6).max(MIN_POPUP_WIDTH).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect(area, width, height);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(BORDER_FG, step)))
        .style(Style::default().bg(fade(POPUP_BG, step)));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);
    frame.render_widget(Paragraph::new(lines), padded(inner));
}

fn padded(inner: Rect) -> Rect {
    Rect {
        x: inner.x + 2,
        y: inner.y,
        width: inner.width.saturating_sub(4),
        height: inner.height,
    }
}

fn entry_line(state: &PromptState, step: u8) -> Line<'static> {
    let entry_style = Style::default().fg(fade(TEXT_FG, step)).bg(fade(ENTRY_BG, step));
    let mut spans = vec![Span::styled("> ", entry_style)];
    if state.input.buffer.is_empty() {
        spans.push(Span::styled(
            "\u{2588}".to_string(),
            entry_style.add_modifier(Modifier::SLOW_BLINK),
        ));
        spans.push(Span::styled(
            PROMPT_PLACEHOLDER.to_string(),
            entry_style.add_modifier(Modifier::DIM),
        ));
        return Line::from(spans);
    }
    let cursor = state.input.cursor.min(state.input.buffer.len());
    let before: String = state.input.buffer[..cursor].iter().collect();
    let at: String = state
        .input
        .buffer
        .get(cursor)
        .map(|ch| ch.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if cursor < state.input.buffer.len() {
        state.input.buffer[cursor + 1..].iter().collect()
    } else {
        String::new()
    };
    spans.push(Span::styled(before, entry_style));
    spans.push(Span::styled(at, entry_style.add_modifier(Modifier::REVERSED)));
    spans.push(Span::styled(after, entry_style));
    Line::from(spans)
}

fn button_line(labels: &[(&str, bool)], step: u8) -> Line<'static> {
    let mut spans = Vec::new();
    for &(label, focused) in labels {
        let button_style = if focused {
            Style::default()
                .fg(fade(TEXT_FG, step))
                .bg(fade(SELECTION_BG, step))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade(TEXT_FG, step)).bg(fade(FOCUS_BG, step))
        };
        spans.push(Span::styled(format!("[ {label} ]"), button_style));
        spans.push(Span::styled("  ", style(TEXT_FG, step)));
    }
    spans.pop();
    Line::from(spans)
}

pub(crate) fn draw_prompt(frame: &mut Frame, state: &PromptState, step: u8) {
    let width = content_width(frame.area());
    let mut lines = message_lines(&state.message, width, step);
    lines.push(Line::default());
    lines.push(entry_line(state, step));
    lines.push(Line::default());
    lines.push(hint_line("Enter to confirm · Esc to cancel", step));
    render_popup(frame, &state.title, lines, step);
}

pub(crate) fn draw_confirm(frame: &mut Frame, state: &ConfirmState, step: u8) {
    let width = content_width(frame.area());
    let mut lines = message_lines(&state.message, width, step);
    lines.push(Line::default());
    lines.push(button_line(
        &[
            ("No", state.focused == ButtonFocus::Cancel),
            ("Yes", state.focused == ButtonFocus::Confirm),
        ],
        step,
    ));
    lines.push(Line::default());
    lines.push(hint_line("y/n answer directly · Tab moves focus", step));
    render_popup(frame, &state.title, lines, step);
}

pub(crate) fn draw_select(frame: &mut Frame, state: &SelectState, step: u8) {
    let width = content_width(frame.area());
    let mut lines = message_lines(&state.message, width, step);
    lines.push(Line::default());
    for (index, item) in state.items.iter().enumerate() {
        lines.push(select_item_line(state, index, item, width, step));
    }
    lines.push(Line::default());
    let hint = format!(
        "↑/↓ move · Space toggles · Enter: {} · Esc: {}",
        state.confirm_label, state.cancel_label
    );
    lines.push(hint_line(&hint, step));
    render_popup(frame, &state.title, lines, step);
}

fn select_item_line(
    state: &SelectState,
    index: usize,
    item: &str,
    width: u16,
    step: u8,
) -> Line<'static> {
    let marker = if state.multi {
        if state.chosen.get(index).copied().unwrap_or(false) {
            "[x] "
        } else {
            "[ ] "
        }
    } else {
        "  "
    };
    let item_style = match state.visual(index) {
        ItemVisual::Selected => Style::default()
            .fg(fade(TEXT_FG, step))
            .bg(fade(SELECTION_BG, step)),
        ItemVisual::Focused => Style::default()
            .fg(fade(TEXT_FG, step))
            .bg(fade(FOCUS_BG, step)),
        ItemVisual::Plain => style(TEXT_FG, step),
    };
    let mut text = format!("{marker}{item}");
    // Pad so the highlight covers the full row, not just the label.
    let deficit = (width as usize).saturating_sub(text.width());
    text.extend(std::iter::repeat(' ').take(deficit));
    Line::styled(text, item_style)
}

pub(crate) fn draw_alert(frame: &mut Frame, state: &AlertState, step: u8) {
    let width = content_width(frame.area());
    let mut lines = Vec::new();
    if !state.icon.is_empty() {
        lines.push(Line::styled(
            state.icon.clone(),
            style(TEXT_FG, step).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
    }
    lines.extend(message_lines(&state.message, width, step));
    lines.push(Line::default());
    lines.push(button_line(&[("OK", true)], step));
    render_popup(frame, &state.title, lines, step);
}

#[cfg(test)]
mod tests {
    use super::{centered_rect, fade, REVEAL_STEPS};
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(area, 50, 10);
        assert_eq!(popup, Rect::new(15, 7, 50, 10));

        let oversized = centered_rect(area, 200, 100);
        assert_eq!(oversized, area);
    }

    #[test]
    fn fade_ramps_from_black_to_full_color() {
        let base = Color::Rgb(200, 100, 50);
        assert_eq!(fade(base, 0), Color::Rgb(0, 0, 0));
        assert_eq!(fade(base, REVEAL_STEPS), base);
        let Color::Rgb(r, g, b) = fade(base, REVEAL_STEPS / 2) else {
            panic!("fade must keep rgb colors rgb");
        };
        assert_eq!((r, g, b), (100, 50, 25));
    }

    #[test]
    fn fade_leaves_named_colors_alone() {
        assert_eq!(fade(Color::Reset, 3), Color::Reset);
    }
}

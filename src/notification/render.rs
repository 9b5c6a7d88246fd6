//! Toast stack rendering
//!
//! Toasts are stacked at the top of the frame, centered, newest on top.
//! Only the cells under each toast are cleared so the rest of the UI stays
//! visible around the stack.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::entry::{Phase, ToastEntry};
use super::stack::{ToastRegion, ToastStack};
use super::toast::Toast;
use crate::widgets::popup::{clear_area, top_centered_popup, top_right_label};

const CLOSE_LABEL: &str = "[x]";
// Border plus one column of padding on each side
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;
const MIN_WIDTH: u16 = 12;

/// Draw the stack over whatever is already in the frame
pub fn render_toasts(frame: &mut Frame, stack: &mut ToastStack) {
    let regions = layout_toasts(frame.area(), stack);

    for region in &regions {
        if let Some(entry) = stack.get(region.id) {
            render_toast(frame, entry, region.area);
        }
    }

    stack.set_regions(regions);
}

/// Compute where each drawable toast goes, top to bottom
///
/// Entering toasts take no space. Toasts that would overflow the bottom of
/// `area` are left out.
pub fn layout_toasts(area: Rect, stack: &ToastStack) -> Vec<ToastRegion> {
    let width = stack.width().min(area.width);
    if width < MIN_WIDTH {
        return Vec::new();
    }

    let mut regions = Vec::new();
    let mut offset = 0u16;

    for entry in stack.entries() {
        if entry.phase() == Phase::Entering {
            continue;
        }

        let height = toast_height(entry.toast(), width);
        if offset.saturating_add(height) > area.height {
            break;
        }

        let toast_area = top_centered_popup(area, width, height, offset);
        regions.push(ToastRegion {
            id: entry.id(),
            area: toast_area,
            close: top_right_label(toast_area, CLOSE_LABEL.len() as u16),
        });
        offset += height;
    }

    regions
}

fn toast_height(toast: &Toast, width: u16) -> u16 {
    let inner_width = width.saturating_sub(HORIZONTAL_CHROME);
    let lines = wrap_message(&toast.message, inner_width).len().max(1);
    (lines as u16).saturating_add(VERTICAL_CHROME)
}

fn render_toast(frame: &mut Frame, entry: &ToastEntry, area: Rect) {
    let toast = entry.toast();
    let accent = if entry.is_leaving() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(toast.severity.color())
    };
    let body_style = if entry.is_leaving() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let heading = toast.title.as_deref().unwrap_or(toast.severity.label());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", toast.severity.glyph()), accent),
            Span::styled(
                format!("{} ", heading),
                accent.add_modifier(Modifier::BOLD),
            ),
        ]))
        .title_top(Line::from(Span::styled(CLOSE_LABEL, accent)).alignment(Alignment::Right))
        .border_style(accent)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black));

    let inner_width = area.width.saturating_sub(HORIZONTAL_CHROME);
    let lines: Vec<Line> = wrap_message(&toast.message, inner_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, body_style)))
        .collect();

    clear_area(frame, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Greedy word wrap by display width
///
/// Explicit newlines are kept; words wider than `width` are split.
pub fn wrap_message(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(current_width > 0);

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Horizontally centered popup whose top edge sits `top_offset` rows into `frame_area`
pub fn top_centered_popup(frame_area: Rect, width: u16, height: u16, top_offset: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_y = frame_area.y + top_offset.min(frame_area.height);
    let popup_height = height.min(frame_area.bottom().saturating_sub(popup_y));

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Cells of a right-aligned top-border label of `label_width` columns
pub fn top_right_label(area: Rect, label_width: u16) -> Rect {
    // One column is kept for the border corner
    let x = area.right().saturating_sub(label_width + 1).max(area.x);
    Rect {
        x,
        y: area.y,
        width: label_width.min(area.width),
        height: area.height.min(1),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

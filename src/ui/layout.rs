//! Layout management and calculations
//!
//! Every floating surface is anchored to the bottom-right corner of the
//! terminal. Rectangles are clipped to the available area, so a tiny terminal
//! yields smaller (possibly empty) surfaces rather than out-of-bounds ones.

use ratatui::layout::Rect;

use crate::constants::{EDGE_MARGIN, PANEL_MAX_WIDTH, PICKER_BUTTON_WIDTH, SURFACE_GAP, TOGGLE_HEIGHT, TOGGLE_WIDTH};

/// Manages layout calculations for the floating widget
pub struct LayoutManager;

impl LayoutManager {
    /// Position of the always-visible toggle button
    #[must_use]
    pub fn toggle_area(area: Rect) -> Rect {
        let x = area.right().saturating_sub(EDGE_MARGIN + TOGGLE_WIDTH).max(area.x);
        let y = area.bottom().saturating_sub(EDGE_MARGIN + TOGGLE_HEIGHT).max(area.y);
        Rect::new(x, y, TOGGLE_WIDTH, TOGGLE_HEIGHT).intersection(area)
    }

    /// Category buttons, in category order.
    ///
    /// Without a form they stack vertically above the toggle; with a form open
    /// they line up horizontally to the left of the toggle.
    #[must_use]
    pub fn picker_areas(area: Rect, form_open: bool, count: u16) -> Vec<Rect> {
        let toggle = Self::toggle_area(area);

        (0..count)
            .map(|i| {
                let rect = if form_open {
                    let row_width = count * PICKER_BUTTON_WIDTH + count.saturating_sub(1) * SURFACE_GAP;
                    let start = toggle.x.saturating_sub(SURFACE_GAP + row_width);
                    Rect::new(
                        start + i * (PICKER_BUTTON_WIDTH + SURFACE_GAP),
                        toggle.y,
                        PICKER_BUTTON_WIDTH,
                        TOGGLE_HEIGHT,
                    )
                } else {
                    let column_top = toggle.y.saturating_sub(SURFACE_GAP + count * TOGGLE_HEIGHT);
                    Rect::new(toggle.x, column_top + i * TOGGLE_HEIGHT, PICKER_BUTTON_WIDTH, TOGGLE_HEIGHT)
                };
                rect.intersection(area)
            })
            .collect()
    }

    /// Panel floating above the toggle row, right-aligned with the toggle
    #[must_use]
    pub fn panel_area(area: Rect, height: u16) -> Rect {
        let toggle = Self::toggle_area(area);
        let width = PANEL_MAX_WIDTH.min(area.width.saturating_sub(2 * EDGE_MARGIN));
        let bottom = toggle.y.saturating_sub(SURFACE_GAP);
        let height = height.min(bottom.saturating_sub(area.y));
        let x = toggle.right().saturating_sub(width).max(area.x);
        Rect::new(x, bottom.saturating_sub(height), width, height).intersection(area)
    }

    /// Acknowledgement panel sized for `line_count` lines of text plus borders
    #[must_use]
    pub fn ack_area(area: Rect, line_count: u16) -> Rect {
        Self::panel_area(area, line_count + 2)
    }

    /// Whether a terminal cell lies inside `rect`
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
    }
}

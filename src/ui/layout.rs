//! Screen partitioning for the gallery and its overlays

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Areas of the gallery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryAreas {
    pub banner: Rect,
    pub form: Rect,
    pub side: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Banner on top, form and side panel in the middle, status and footer below
    #[must_use]
    pub fn gallery_layout(area: Rect, footer_height: u16) -> GalleryAreas {
        let banner_height = (area.height / 3).min(9);

        let [banner, body, status, footer] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let side_width = (body.width / 3).min(50);
        let [form, side] = Layout::horizontal([Constraint::Min(0), Constraint::Length(side_width)]).areas(body);

        GalleryAreas {
            banner,
            form,
            side,
            status,
            footer,
        }
    }

    /// Rectangle `percent_x` wide and `height_lines` tall, centered in `r`
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height_lines)])
            .flex(Flex::Center)
            .areas(r);
        let [area] = Layout::horizontal([Constraint::Percentage(percent_x.min(100))])
            .flex(Flex::Center)
            .areas(row);
        area
    }
}

//! Screen geometry for the row of end boxes

use serde::{Deserialize, Serialize};

/// Pixel rectangle; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Size of the target display in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Areas of the screen and one rectangle per end box.
///
/// Only depends on the screen size and the box count, so it is rebuilt
/// whenever the count changes and reused otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLayout {
    pub screen: Screen,
    pub outer_margin: i32,
    pub box_margin: i32,
    pub top_area_height: i32,
    pub message_area_height: i32,
    pub grid_top: i32,
    pub grid_bottom: i32,
    pub boxes: Vec<Rect>,
}

impl BoardLayout {
    pub fn new(screen: Screen, num_ends: u32) -> Self {
        let sw = screen.width as i32;
        let sh = screen.height as i32;
        let scaled = |size: i32, ratio: f64| (f64::from(size) * ratio) as i32;

        let outer_margin = scaled(sw, 0.035);
        let box_margin = scaled(sw, 0.015);
        let top_area_height = scaled(sh, 0.16).max(80);
        let grid_height = scaled(sh, 0.38).max(120);
        let message_area_height = scaled(sh, 0.24).max(140);

        let grid_top = outer_margin + top_area_height;
        let grid_left = outer_margin;
        let grid_bottom = sh - outer_margin - message_area_height;
        let grid_width = sw - 2 * outer_margin;

        let n = num_ends.max(1) as i32;
        let box_width = ((grid_width - (n + 1) * box_margin) / n).max(0);
        let box_height = grid_height.min(grid_bottom - grid_top).max(0);
        let box_y = grid_top + (grid_bottom - grid_top - box_height) / 2;

        let boxes = (0..n)
            .map(|i| Rect {
                x: grid_left + box_margin + i * (box_width + box_margin),
                y: box_y,
                width: box_width,
                height: box_height,
            })
            .collect();

        Self {
            screen,
            outer_margin,
            box_margin,
            top_area_height,
            message_area_height,
            grid_top,
            grid_bottom,
            boxes,
        }
    }

    pub fn end_count(&self) -> u32 {
        self.boxes.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hd_eight_boxes() {
        let layout = BoardLayout::new(Screen::default(), 8);
        assert_eq!(layout.end_count(), 8);
        assert_eq!(layout.outer_margin, 67);
        assert_eq!(layout.box_margin, 28);
        assert_eq!(layout.top_area_height, 172);
        assert_eq!(layout.message_area_height, 259);

        let first = layout.boxes[0];
        assert_eq!(first.x, 67 + 28);
        assert_eq!(first.width, (1920 - 2 * 67 - 9 * 28) / 8);
    }

    #[test]
    fn boxes_stay_inside_the_grid_and_do_not_overlap() {
        for n in [1u32, 3, 8, 12] {
            let layout = BoardLayout::new(Screen::default(), n);
            let right_edge = 1920 - layout.outer_margin;
            for pair in layout.boxes.windows(2) {
                assert!(pair[0].right() <= pair[1].x);
            }
            assert!(layout.boxes.last().unwrap().right() <= right_edge);
            for rect in &layout.boxes {
                assert!(rect.y >= layout.grid_top);
                assert!(rect.y + rect.height <= layout.grid_bottom);
            }
        }
    }

    #[test]
    fn small_screens_use_minimum_areas() {
        let layout = BoardLayout::new(Screen { width: 320, height: 240 }, 4);
        assert_eq!(layout.top_area_height, 80);
        assert_eq!(layout.message_area_height, 140);
        assert!(layout.boxes.iter().all(|r| r.height >= 0 && r.width >= 0));
    }

    #[test]
    fn zero_ends_still_yields_one_box() {
        assert_eq!(BoardLayout::new(Screen::default(), 0).end_count(), 1);
    }
}

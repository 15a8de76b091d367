//! What the display shows for one tick

use serde::Serialize;

use super::layout::{BoardLayout, Rect};
use crate::{state::Reading, utils::format_clock};

pub const POINTER_LABEL: &str = "You should be here";
pub const PAUSED_SUFFIX: &str = "  (paused)";

/// Border thickness drawn inside each box; fills are inset by this on both sides
const BOX_BORDER: i32 = 3;
/// Gap between the pointer tip and the top of its box
const POINTER_GAP: i32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxFrame {
    /// 1-based number printed in the box
    pub label: u32,
    pub rect: Rect,
    pub fill_ratio: f64,
    pub fill_width: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerFrame {
    pub segment_index: u32,
    pub x: i32,
    pub tip_y: i32,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub sequence: u64,
    pub timer_text: String,
    pub paused: bool,
    pub boxes: Vec<BoxFrame>,
    pub pointer: PointerFrame,
    pub message: String,
    pub logo_url: String,
}

impl Frame {
    /// Compose a frame from a reading and a layout built for the same end
    /// count.
    ///
    /// The timer face stops at the total even when elapsed overruns it.
    pub fn compose(reading: &Reading, layout: &BoardLayout, sequence: u64) -> Self {
        let status = &reading.status;
        let progress = &reading.progress;

        let shown = status.elapsed_seconds.min(status.total_seconds);
        let mut timer_text = format_clock(shown as i64);
        if status.paused {
            timer_text.push_str(PAUSED_SUFFIX);
        }

        let boxes = layout
            .boxes
            .iter()
            .zip(0u32..)
            .map(|(rect, index)| {
                let fill_ratio = progress.segment_fill(index);
                let inner_width = (rect.width - 2 * BOX_BORDER).max(0);
                BoxFrame {
                    label: index + 1,
                    rect: *rect,
                    fill_ratio,
                    fill_width: (f64::from(inner_width) * fill_ratio) as i32,
                }
            })
            .collect::<Vec<_>>();

        let pointer_index = progress
            .current_segment_index
            .min(layout.end_count().saturating_sub(1));
        let pointer_rect = layout.boxes.get(pointer_index as usize).copied().unwrap_or(Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        });

        Self {
            sequence,
            timer_text,
            paused: status.paused,
            boxes,
            pointer: PointerFrame {
                segment_index: pointer_index,
                x: pointer_rect.center_x(),
                tip_y: pointer_rect.y - POINTER_GAP,
                label: POINTER_LABEL,
            },
            message: status.message.clone(),
            logo_url: status.logo_url.clone(),
        }
    }
}

//! Fixed-rate display loop

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::{
    display::{BoardLayout, Frame, Screen},
    error::Result,
    state::AppState,
};

/// Composes one frame per tick and publishes it on the state's frame channel.
///
/// Keeps the box layout between ticks and rebuilds it only when the number
/// of ends differs from the last one seen.
#[derive(Debug)]
pub struct DisplayLoop {
    state: Arc<AppState>,
    screen: Screen,
    layout: Option<BoardLayout>,
    sequence: u64,
    last_pointer: Option<u32>,
}

impl DisplayLoop {
    pub fn new(state: Arc<AppState>, screen: Screen) -> Self {
        Self {
            state,
            screen,
            layout: None,
            sequence: 0,
            last_pointer: None,
        }
    }

    /// Run a single tick: read, lay out if needed, compose, publish.
    pub fn tick(&mut self) -> Result<Frame> {
        let reading = self.state.read()?;
        let num_ends = reading.progress.num_ends;

        let layout = match self.layout.take() {
            Some(layout) if layout.end_count() == num_ends => layout,
            previous => {
                if let Some(previous) = previous {
                    info!("End count changed from {} to {}, rebuilding layout", previous.end_count(), num_ends);
                }
                BoardLayout::new(self.screen, num_ends)
            }
        };

        self.sequence += 1;
        let frame = Frame::compose(&reading, &layout, self.sequence);
        self.layout = Some(layout);

        if self.last_pointer != Some(frame.pointer.segment_index) {
            debug!("Pointer now on end {}", frame.pointer.segment_index + 1);
            self.last_pointer = Some(frame.pointer.segment_index);
        }

        self.state.publish_frame(frame.clone());
        Ok(frame)
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }
}

/// Background task that drives the display loop at `fps` ticks per second
pub async fn display_loop_task(state: Arc<AppState>, screen: Screen, fps: u32) {
    info!("Starting display loop at {} fps on {}x{}", fps, screen.width, screen.height);

    let period = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut display = DisplayLoop::new(state, screen);

    loop {
        ticker.tick().await;
        if let Err(e) = display.tick() {
            error!("Display tick failed: {}", e);
        }
    }
}

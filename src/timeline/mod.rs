//! The timeline chart's model: data rows, playback and the visible window.

use log::{debug, info};
use rand::Rng;

mod rows;
mod transport;
mod viewport;

pub use rows::{DataRow, RowPage};
pub use transport::{PlayState, Transport};
pub use viewport::{Domain, Viewport};

use crate::config::TimelineConfig;
use crate::gesture::{GestureTarget, Intent};

/// Timeline chart state that touch gestures and the controls act on.
#[derive(Debug, Clone)]
pub struct Timeline {
    config: TimelineConfig,
    rows: Vec<DataRow>,
    /// Index of the selected row.
    selected: usize,
    transport: Transport,
    viewport: Viewport,
}
impl Timeline {
    /// Returns a timeline filled with the configured number of random rows.
    pub fn new<R: Rng + ?Sized>(config: TimelineConfig, rng: &mut R) -> Self {
        let mut ret = Self {
            config,
            rows: vec![],
            selected: 0,
            transport: Transport::new(config.total_time),
            viewport: Viewport::new(&config),
        };
        ret.add_rows(config.initial_rows, rng);
        ret
    }

    /// Returns the timeline's configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }
    /// Returns every row, in index order.
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }
    /// Returns the index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }
    /// Returns the playback control.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
    /// Returns the playback control mutably.
    pub fn transport_mut(&mut self) -> &mut Transport {
        &mut self.transport
    }
    /// Returns the visible window.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Appends `count` random rows.
    pub fn add_rows<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let first = self.rows.len();
        for i in first..first + count {
            self.rows.push(DataRow::random(i, rng));
        }
        info!("added {} rows, {} total", count, self.rows.len());
    }

    /// Selects the next row, stopping at the last one.
    pub fn select_next(&mut self) {
        let last = self.rows.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }
    /// Selects the previous row, stopping at the first one.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Returns the page of rows containing the selection.
    pub fn page(&self) -> RowPage {
        RowPage::containing(self.selected, self.config.rows_per_page)
    }
    /// Returns the rows on the selected page.
    pub fn visible_rows(&self) -> impl Iterator<Item = &DataRow> + '_ {
        let page = self.page();
        self.rows.iter().filter(move |row| page.contains(row.index))
    }
}

impl GestureTarget for Timeline {
    fn apply(&mut self, intent: &Intent) {
        match *intent {
            Intent::TouchStart(_) => (),
            Intent::CursorMove(px) => {
                let time = self.viewport.value_at(px);
                debug!("cursor at {:.1}px = {:.2}s", px, time);
                self.transport.seek(time);
            }
            Intent::PanDelta(d) => {
                self.viewport.pan_by_pixels(d.from, d.to);
                debug!("window panned to {}", self.viewport.window());
            }
            Intent::ZoomDelta(d) => {
                let vp = &mut self.viewport;
                if vp.zoom_by_pixels(d.from_distance, d.to_distance, d.center) {
                    debug!("window zoomed to {}", vp.window());
                }
            }
        }
    }
}

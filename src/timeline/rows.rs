use rand::Rng;

/// Latest time a random row can start at.
const MAX_RANDOM_DELAY: f64 = 29.0;
/// Shortest random row.
const MIN_RANDOM_DURATION: f64 = 1.0;
/// Longest random row.
const MAX_RANDOM_DURATION: f64 = 10.0;

/// One bar on the timeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataRow {
    /// Identifier used for selection.
    pub block_id: usize,
    /// Position of the row from the top of the chart.
    pub index: usize,
    /// Start time in seconds.
    pub delay: f64,
    /// Length in seconds.
    pub duration: f64,
}
impl DataRow {
    /// Returns a row at `index` with a random start time and length.
    pub fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self {
            block_id: index,
            index,
            delay: rng.gen_range(0.0..MAX_RANDOM_DELAY),
            duration: rng.gen_range(MIN_RANDOM_DURATION..MAX_RANDOM_DURATION),
        }
    }

    /// Returns the end time in seconds.
    pub fn end(self) -> f64 {
        self.delay + self.duration
    }
}

/// Range of row indices shown together.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowPage {
    /// First index on the page.
    pub first: usize,
    /// One past the last index on the page.
    pub last: usize,
}
impl RowPage {
    /// Returns the page of `rows_per_page` rows that contains `selected`.
    pub fn containing(selected: usize, rows_per_page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let first = selected - selected % rows_per_page;
        Self {
            first,
            last: first + rows_per_page,
        }
    }

    /// Returns `true` if the row at `index` is on this page.
    pub fn contains(self, index: usize) -> bool {
        self.first <= index && index < self.last
    }
}

use std::time::Duration;

/// Construction-time configuration of a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Grid width in cells.
    pub columns: usize,
    /// Grid height in cells.
    pub rows: usize,
    /// Period of the automatic stepping schedule while playing.
    pub tick_interval: Duration,
    /// Flip cell 0 after every automatic `Next`, as the original UI did on
    /// each tick. Kept behind this switch so the quirk can be turned off
    /// without touching the reducer.
    pub toggle_first_cell_on_tick: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: 12,
            rows: 8,
            tick_interval: Duration::from_millis(1000),
            toggle_first_cell_on_tick: true,
        }
    }
}

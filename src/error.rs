use thiserror::Error;

/// Errors surfaced by grid construction and the session loop.
///
/// The reducer itself only fails on an out-of-range cell toggle; everything
/// else is rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Cell count does not fill whole rows, or a dimension is zero.
    #[error("invalid grid dimensions: {number_of_cells} cells over {columns} columns")]
    InvalidDimensions {
        number_of_cells: usize,
        columns: usize,
    },

    /// `ToggleCell` addressed a position outside the grid.
    #[error("cell index {index} out of range for a grid of {number_of_cells} cells")]
    InvalidIndex {
        index: usize,
        number_of_cells: usize,
    },

    /// Dispatch on a handle whose session has already shut down.
    #[error("session is closed")]
    SessionClosed,
}

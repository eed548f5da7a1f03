use crate::EngineError;

/// One user- or timer-issued command consumed by [`transition`](crate::transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the cell at the given flat index.
    ToggleCell(usize),
    /// Flip the automatic-stepping flag.
    TogglePlaying,
    /// Advance the grid by one generation.
    Next,
    /// Return to an all-dead grid with generation 0.
    Reset,
}

/// An immutable grid snapshot: flat row-major cells plus the session counters.
///
/// Index 0 is the top-left cell. Every transition produces a brand-new value;
/// nothing mutates a `GridState` after construction, so snapshots can be
/// shared freely with observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: Vec<bool>,
    columns: usize,
    generation: u64,
    playing: bool,
}

impl GridState {
    /// Creates an all-dead grid with `generation = 0` and `playing = false`.
    ///
    /// `number_of_cells` must be a positive multiple of `columns`.
    pub fn initial(number_of_cells: usize, columns: usize) -> Result<Self, EngineError> {
        if columns == 0 || number_of_cells == 0 || number_of_cells % columns != 0 {
            return Err(EngineError::InvalidDimensions {
                number_of_cells,
                columns,
            });
        }
        Ok(Self {
            cells: vec![false; number_of_cells],
            columns,
            generation: 0,
            playing: false,
        })
    }

    /// Like [`GridState::initial`], but each cell starts alive with
    /// probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        number_of_cells: usize,
        columns: usize,
        fill_rate: f64,
        seed: Option<u64>,
    ) -> Result<Self, EngineError> {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut state = Self::initial(number_of_cells, columns)?;
        for cell in &mut state.cells {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(state)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Cell state at a flat index, `None` if out of range.
    pub fn cell(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// Total number of alive cells in the grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn replace_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            cells,
            columns: self.columns,
            generation: self.generation,
            playing: self.playing,
        }
    }

    pub(crate) fn next_generation(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            cells,
            columns: self.columns,
            generation: self.generation + 1,
            playing: self.playing,
        }
    }

    pub(crate) fn toggled_playing(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            columns: self.columns,
            generation: self.generation,
            playing: !self.playing,
        }
    }
}

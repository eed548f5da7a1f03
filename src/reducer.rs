use crate::{count_live_neighbors, Action, EngineError, GridState};

/// Applies `action` to `state`, returning the next state.
///
/// The reducer is pure: no clock, no I/O, and the input state is never
/// mutated. The only failure is an out-of-range [`Action::ToggleCell`].
pub fn transition(state: &GridState, action: &Action) -> Result<GridState, EngineError> {
    match *action {
        Action::ToggleCell(index) => {
            let number_of_cells = state.cells().len();
            if index >= number_of_cells {
                return Err(EngineError::InvalidIndex {
                    index,
                    number_of_cells,
                });
            }
            let mut cells = state.cells().to_vec();
            cells[index] = !cells[index];
            Ok(state.replace_cells(cells))
        }
        Action::Next => {
            // All neighbor counts read the pre-transition snapshot; no cell
            // update may influence another cell's count within one step.
            let prev = state.cells();
            let cells = prev
                .iter()
                .enumerate()
                .map(
                    |(i, &alive)| match count_live_neighbors(i, state.columns(), prev) {
                        2 => alive,
                        3 => true,
                        _ => false,
                    },
                )
                .collect();
            Ok(state.next_generation(cells))
        }
        Action::TogglePlaying => Ok(state.toggled_playing()),
        Action::Reset => GridState::initial(state.cells().len(), state.columns()),
    }
}

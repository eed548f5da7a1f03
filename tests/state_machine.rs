use gol_reducer::{transition, Action, EngineError, GridState};

fn seeded(live: &[usize], number_of_cells: usize, columns: usize) -> GridState {
    let mut state = GridState::initial(number_of_cells, columns).unwrap();
    for &i in live {
        state = transition(&state, &Action::ToggleCell(i)).unwrap();
    }
    state
}

fn live_indices(state: &GridState) -> Vec<usize> {
    state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &alive)| alive)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn reset_clears_everything() {
    let mut state = seeded(&[0, 7, 12, 24], 25, 5);
    state = transition(&state, &Action::TogglePlaying).unwrap();
    state = transition(&state, &Action::Next).unwrap();

    let reset = transition(&state, &Action::Reset).unwrap();
    assert_eq!(reset.generation(), 0);
    assert!(!reset.playing());
    assert_eq!(reset.population(), 0);
    assert_eq!(reset.columns(), state.columns());
    assert_eq!(reset.cells().len(), state.cells().len());
    assert_eq!(reset, GridState::initial(25, 5).unwrap());
}

#[test]
fn toggle_is_an_involution() {
    let state = seeded(&[3, 17], 25, 5);
    let once = transition(&state, &Action::ToggleCell(12)).unwrap();
    assert!(once.cell(12).unwrap());
    assert_eq!(once.generation(), state.generation());
    assert_eq!(once.playing(), state.playing());

    let twice = transition(&once, &Action::ToggleCell(12)).unwrap();
    assert_eq!(twice.cells(), state.cells());
    assert_eq!(twice.generation(), state.generation());
    assert_eq!(twice.playing(), state.playing());
}

#[test]
fn toggle_out_of_range_is_rejected() {
    let state = GridState::initial(25, 5).unwrap();
    assert_eq!(
        transition(&state, &Action::ToggleCell(25)),
        Err(EngineError::InvalidIndex {
            index: 25,
            number_of_cells: 25
        })
    );
    // The failed transition left no trace.
    assert_eq!(state.population(), 0);
}

#[test]
fn generation_counts_next_transitions_only() {
    let mut state = GridState::initial(25, 5).unwrap();
    assert_eq!(state.generation(), 0);

    state = transition(&state, &Action::Next).unwrap();
    assert_eq!(state.generation(), 1);

    state = transition(&state, &Action::ToggleCell(0)).unwrap();
    state = transition(&state, &Action::TogglePlaying).unwrap();
    assert_eq!(state.generation(), 1);

    state = transition(&state, &Action::Next).unwrap();
    assert_eq!(state.generation(), 2);
}

#[test]
fn blinker_oscillates_with_period_two() {
    // Horizontal triple in row 2 of a 5x5 grid, away from the edges.
    let state = seeded(&[11, 12, 13], 25, 5);

    let vertical = transition(&state, &Action::Next).unwrap();
    assert_eq!(live_indices(&vertical), vec![7, 12, 17]);

    let horizontal = transition(&vertical, &Action::Next).unwrap();
    assert_eq!(live_indices(&horizontal), vec![11, 12, 13]);
    assert_eq!(horizontal.generation(), 2);
}

#[test]
fn dead_grid_stays_dead() {
    let state = GridState::initial(9, 3).unwrap();
    let next = transition(&state, &Action::Next).unwrap();
    assert_eq!(next.population(), 0);
    assert_eq!(next.generation(), 1);
}

#[test]
fn block_is_a_still_life() {
    // 2x2 block in the interior of a 4x4 grid.
    let state = seeded(&[5, 6, 9, 10], 16, 4);
    let next = transition(&state, &Action::Next).unwrap();
    assert_eq!(next.cells(), state.cells());
}

#[test]
fn toggle_playing_leaves_grid_untouched() {
    let state = seeded(&[2, 8, 14], 25, 5);
    let playing = transition(&state, &Action::TogglePlaying).unwrap();
    assert!(playing.playing());
    assert_eq!(playing.cells(), state.cells());
    assert_eq!(playing.generation(), state.generation());

    let paused = transition(&playing, &Action::TogglePlaying).unwrap();
    assert!(!paused.playing());
    assert_eq!(paused.cells(), state.cells());
}

#[test]
fn edge_cells_do_not_see_neighbors_across_row_wraps() {
    // Cells 4 (end of row 0) and 5 (start of row 1) are flat-adjacent but
    // 4 columns apart; with strict bounding neither influences the other.
    // A lone pair like this starves: both die in one step.
    let state = seeded(&[4, 5], 25, 5);
    let next = transition(&state, &Action::Next).unwrap();
    assert_eq!(next.population(), 0);
}

#[test]
fn overcrowded_cell_dies() {
    // Center of a 3x3 grid with 5 live neighbors.
    let state = seeded(&[0, 1, 2, 3, 4, 5], 9, 3);
    let next = transition(&state, &Action::Next).unwrap();
    assert!(!next.cell(4).unwrap());
}

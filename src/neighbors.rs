/// Counts live cells among the 8 neighbors of `index` in a row-major grid.
///
/// Neighbors are bounded strictly: a position only counts if both its row and
/// column land inside the grid. Horizontal neighbors never wrap into an
/// adjacent row, so edge and corner cells see fewer than 8 positions.
pub fn count_live_neighbors(index: usize, columns: usize, cells: &[bool]) -> u8 {
    debug_assert!(columns > 0 && cells.len() % columns == 0);
    debug_assert!(index < cells.len());

    let rows = (cells.len() / columns) as isize;
    let row = (index / columns) as isize;
    let col = (index % columns) as isize;

    let mut count = 0;
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row + dr, col + dc);
            if r < 0 || r >= rows || c < 0 || c >= columns as isize {
                continue;
            }
            count += cells[(r * columns as isize + c) as usize] as u8;
        }
    }
    count
}

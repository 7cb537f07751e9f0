// Shared board/render constants.
pub const GRID_SIZE: i32 = 20; // board units per grid cell
pub const BOARD_SIZE: i32 = 400; // square board edge in units
pub const GRID_CELLS: i32 = BOARD_SIZE / GRID_SIZE;
// Fixed positions, all grid-aligned. Obstacles never move, and reset leaves them alone.
pub const START: (i32, i32) = (5 * GRID_SIZE, 5 * GRID_SIZE);
pub const FOOD_START: (i32, i32) = (10 * GRID_SIZE, 10 * GRID_SIZE);
pub const OBSTACLES: [(i32, i32); 3] = [
    (7 * GRID_SIZE, 7 * GRID_SIZE),
    (12 * GRID_SIZE, 12 * GRID_SIZE),
    (15 * GRID_SIZE, 5 * GRID_SIZE),
];
pub const TICK_MS: u64 = 100;
pub const CELL_W: usize = 2; // render each cell as two characters wide
pub const PLAY_W: usize = GRID_CELLS as usize * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = GRID_CELLS as usize + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

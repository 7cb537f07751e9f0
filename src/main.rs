use std::error::Error;

mod app;
mod config;
mod game;
mod ui;
pub use game::{Cell, Game, Heading, Snake, Velocity};
pub use config::{
    BOARD_SIZE, CELL_W, FOOD_START, GRID_CELLS, GRID_SIZE, MIN_PANE_WIDTH, OBSTACLES, PLAY_H,
    PLAY_W, START, TICK_MS,
};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}

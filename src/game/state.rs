use rand::Rng;

use crate::game::{Cell, Heading, Snake, Velocity};
use crate::{FOOD_START, GRID_CELLS, GRID_SIZE, OBSTACLES, START};

pub struct Game {
    pub snake: Snake,
    pub velocity: Velocity,
    pub food: Cell,
    pub obstacles: [Cell; 3],
    pub score: u64,
}

impl Game {
    pub fn new() -> Self {
        Self {
            snake: Snake::new(Cell::from(START)),
            velocity: Velocity::ZERO,
            food: Cell::from(FOOD_START),
            obstacles: OBSTACLES.map(Cell::from),
            score: 0,
        }
    }

    /// One simulation step: move, grow or trim, then resolve collisions.
    pub fn advance_tick(&mut self) {
        if self.velocity.is_zero() {
            return;
        }
        let head = self.snake.head().step_wrapped(self.velocity);
        self.snake.push_head(head);
        if head == self.food {
            self.score += 1;
            self.place_food();
        } else {
            self.snake.pop_tail();
        }
        if self.snake.hits_body(head) || self.hits_obstacle(head) {
            self.reset();
        }
    }

    /// Steer the snake. Input on the axis already in motion is dropped,
    /// so the head can never reverse straight into the body. The velocity
    /// is overwritten in place; the last accepted press before a tick wins.
    pub fn set_direction(&mut self, heading: Heading) {
        let blocked = if heading.is_horizontal() {
            self.velocity.dx != 0
        } else {
            self.velocity.dy != 0
        };
        if !blocked {
            self.velocity = heading.velocity();
        }
    }

    /// Drop food on a uniformly random grid cell.
    /// No occupancy check: it can land on the snake or an obstacle.
    pub fn place_food(&mut self) {
        let mut rng = rand::thread_rng();
        self.food = Cell::new(
            rng.gen_range(0..GRID_CELLS) * GRID_SIZE,
            rng.gen_range(0..GRID_CELLS) * GRID_SIZE,
        );
    }

    /// Back to the single-cell start state. Obstacles stay put.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Cell::from(START));
        self.velocity = Velocity::ZERO;
        self.score = 0;
        self.place_food();
    }

    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }

    fn hits_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_SIZE;

    #[test]
    fn idle_tick_leaves_snake_unchanged() {
        let mut game = Game::new();
        game.advance_tick();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), Cell::from(START));
        assert_eq!(game.score, 0);
    }

    #[test]
    fn first_press_starts_motion() {
        let mut game = Game::new();
        game.set_direction(Heading::Right);
        assert_eq!(game.velocity, Velocity { dx: 20, dy: 0 });
        game.advance_tick();
        assert_eq!(game.snake.head(), Cell::new(120, 100));
        assert_eq!(game.snake.len(), 1);
    }

    #[test]
    fn same_axis_press_is_dropped() {
        let mut game = Game::new();
        game.set_direction(Heading::Right);
        game.set_direction(Heading::Left);
        assert_eq!(game.velocity, Heading::Right.velocity());
        game.set_direction(Heading::Right);
        assert_eq!(game.velocity, Heading::Right.velocity());
    }

    #[test]
    fn orthogonal_press_is_accepted() {
        let mut game = Game::new();
        game.set_direction(Heading::Right);
        game.set_direction(Heading::Up);
        assert_eq!(game.velocity, Heading::Up.velocity());
    }

    #[test]
    fn head_wraps_at_the_right_edge() {
        let mut game = Game::new();
        game.snake = Snake::new(Cell::new(BOARD_SIZE - GRID_SIZE, 100));
        game.set_direction(Heading::Right);
        game.advance_tick();
        assert_eq!(game.snake.head(), Cell::new(0, 100));
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut game = Game::new();
        game.food = Cell::new(120, 100);
        game.set_direction(Heading::Right);
        game.advance_tick();
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.snake.head(), Cell::new(120, 100));
    }

    #[test]
    fn plain_tick_keeps_length() {
        let mut game = Game::new();
        game.food = Cell::new(0, 0);
        game.set_direction(Heading::Down);
        for _ in 0..4 {
            game.advance_tick();
            assert_eq!(game.snake.len(), 1);
        }
        assert_eq!(game.score, 0);
    }

    #[test]
    fn obstacle_collision_resets_everything() {
        let mut game = Game::new();
        // One cell left of the (140, 140) obstacle, heading into it.
        game.snake = Snake::new(Cell::new(120, 140));
        game.score = 3;
        game.set_direction(Heading::Right);
        game.advance_tick();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), Cell::from(START));
        assert_eq!(game.velocity, Velocity::ZERO);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn self_collision_resets_everything() {
        let mut game = Game::new();
        // Length 5, head at (100, 100), body curling back under the head.
        // Stepping down lands on (100, 120), a mid-body segment; the tail
        // at (80, 120) moves away the same tick and does not count.
        let mut snake = Snake::new(Cell::new(80, 120));
        snake.push_head(Cell::new(100, 120));
        snake.push_head(Cell::new(120, 120));
        snake.push_head(Cell::new(120, 100));
        snake.push_head(Cell::new(100, 100));
        game.snake = snake;
        game.score = 4;
        game.set_direction(Heading::Down);
        game.advance_tick();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), Cell::from(START));
        assert_eq!(game.velocity, Velocity::ZERO);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn tail_cell_is_safe_to_enter() {
        let mut game = Game::new();
        // 2x2 loop. The tail vacates (100, 120) on the same tick the head
        // arrives there, so this is not a collision.
        let mut snake = Snake::new(Cell::new(100, 120));
        snake.push_head(Cell::new(120, 120));
        snake.push_head(Cell::new(120, 100));
        snake.push_head(Cell::new(100, 100));
        game.snake = snake;
        game.set_direction(Heading::Down);
        game.advance_tick();
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.snake.head(), Cell::new(100, 120));
    }

    #[test]
    fn reset_leaves_obstacles_alone() {
        let mut game = Game::new();
        let before = game.obstacles;
        game.reset();
        assert_eq!(game.obstacles, before);
    }

    #[test]
    fn food_lands_on_the_grid() {
        let mut game = Game::new();
        for _ in 0..200 {
            game.place_food();
            assert!(game.food.x >= 0 && game.food.x < BOARD_SIZE);
            assert!(game.food.y >= 0 && game.food.y < BOARD_SIZE);
            assert_eq!(game.food.x % GRID_SIZE, 0);
            assert_eq!(game.food.y % GRID_SIZE, 0);
        }
    }
}

//! Game orchestration: turn order between the two players until one of
//! them has no legal move, then scoring by total beads.
//!
//! ```
//! use kalaha::core::GameConfig;
//! use kalaha::game::Game;
//!
//! let mut game = Game::new(&GameConfig::new().with_seed(42));
//! let result = game.run();
//! assert_eq!(game.result(), Some(result));
//! ```

mod state;

pub use state::{Game, GameStatus};

//! Turn loop and game state.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{ConfigError, GameConfig, GameRng, MoveError, Seat, SeatMap};
use crate::player::{Player, TurnReport};
use crate::rules::GameResult;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this seat to move.
    Active(Seat),
    /// Over; the result never changes again.
    Finished(GameResult),
}

/// One game of Kalaha: a board, two players and the RNG they share.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: SeatMap<Player>,
    rng: GameRng,
    status: GameStatus,
    turns: u32,
}

impl Game {
    /// Set up a game from a configuration.
    ///
    /// The configuration is assumed valid; use [`Game::try_new`] to check it.
    /// Without a configured seed, a fresh one is drawn.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Validate the configuration, then set up the game.
    pub fn try_new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Set up a game with an explicit RNG, ignoring `config.seed`.
    #[must_use]
    pub fn with_rng(config: &GameConfig, rng: GameRng) -> Self {
        let board = Board::new(config.beads_per_bowl, config.bowls_per_player);
        let players = SeatMap::new(|seat| Player::new(seat, &board, config.strategies[seat]));

        Self {
            board,
            players,
            rng,
            status: GameStatus::Active(Seat::First),
            turns: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Active(seat) => Some(&self.players[seat]),
            GameStatus::Finished(_) => None,
        }
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Finished(result) => Some(result),
            GameStatus::Active(_) => None,
        }
    }

    /// The winning player. `None` while running or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.result()
            .and_then(|r| r.winner())
            .map(|seat| &self.players[seat])
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Turns taken so far. A turn with extra turns counts once.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Seed of the RNG driving tie-breaks; replays the game exactly.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Total beads (store plus bowls) per seat.
    #[must_use]
    pub fn totals(&self) -> SeatMap<usize> {
        SeatMap::new(|seat| self.players[seat].total_beads(&self.board))
    }

    /// Let the current player take one turn.
    pub fn step(&mut self) -> Result<TurnReport, MoveError> {
        let GameStatus::Active(seat) = self.status else {
            return Err(MoveError::GameOver);
        };
        Ok(self.advance(seat))
    }

    /// Play until one player runs out of moves and return the result.
    #[instrument(skip(self), fields(seed = self.rng.seed()))]
    pub fn run(&mut self) -> GameResult {
        loop {
            match self.status {
                GameStatus::Active(seat) => {
                    self.advance(seat);
                }
                GameStatus::Finished(result) => return result,
            }
        }
    }

    fn advance(&mut self, seat: Seat) -> TurnReport {
        let turn = self.players[seat].take_turn(&mut self.board, &mut self.rng);
        self.turns += 1;
        debug!(%seat, turn = self.turns, sows = turn.sows.len(), continues = turn.continues, "turn");

        self.status = if turn.continues {
            GameStatus::Active(seat.other())
        } else {
            self.finish()
        };
        turn
    }

    fn finish(&self) -> GameStatus {
        let totals = self.totals();
        let result = GameResult::from_totals(&totals);
        info!(
            %result,
            first = totals[Seat::First],
            second = totals[Seat::Second],
            turns = self.turns,
            seed = self.rng.seed(),
            "game finished"
        );
        GameStatus::Finished(result)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.players[Seat::First].describe(&self.board))?;
        write!(f, "{}", self.board)?;
        writeln!(f, "{}", self.players[Seat::Second].describe(&self.board))
    }
}

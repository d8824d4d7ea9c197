use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions:
/// - Idle -> Active, on the first accepted flip
/// - Active -> Complete, when the last pair is matched
/// - any -> Idle, on reset or difficulty change
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Active,
    Complete,
}

impl SessionPhase {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// The most recently evaluated pair. A mismatched pair is already face down on the board by the time a caller
/// sees this, it is kept so the pair can stay on screen for as long as the front-end wants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReveal {
    pub first: CardId,
    pub second: CardId,
    pub first_symbol: Symbol,
    pub second_symbol: Symbol,
    pub matched: bool,
}

/// Read-only copy of a session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// `None` for sessions on a custom layout
    pub difficulty: Option<Difficulty>,
    pub rows: Coord,
    pub cols: Coord,
    pub pair_count: CellCount,
    pub cards: Vec<Card>,
    pub pending_selection: Vec<CardId>,
    pub matched_pair_count: CellCount,
    pub attempt_count: u32,
    pub elapsed_seconds: u32,
    pub is_active: bool,
    pub is_complete: bool,
    pub best_attempts: Option<u32>,
    pub last_pair: Option<PairReveal>,
}

type Pending = SmallVec<[CardId; 2]>;

/// One running game from deal to last match, plus the best scores carried across deals.
#[derive(Clone, Debug)]
pub struct GameSession<G = ShuffledBoardGenerator> {
    generator: G,
    alphabet: Alphabet,
    difficulty: Option<Difficulty>,
    board: Board,
    pending: Pending,
    matched_pair_count: CellCount,
    attempt_count: u32,
    elapsed_seconds: u32,
    phase: SessionPhase,
    best: BestScores,
    last_pair: Option<PairReveal>,
}

impl GameSession {
    /// New session on a randomly shuffled board. The same seed always deals the same sequence of boards.
    pub fn new(difficulty: Difficulty, alphabet: Alphabet, seed: u64) -> Result<Self> {
        Self::with_generator(difficulty, alphabet, ShuffledBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> GameSession<G> {
    pub fn with_generator(difficulty: Difficulty, alphabet: Alphabet, generator: G) -> Result<Self> {
        let required = Difficulty::max_pair_count();
        let available = CellCount::try_from(alphabet.len()).unwrap_or(CellCount::MAX);
        if available < required {
            return Err(GameError::ConfigurationError {
                required,
                available,
            });
        }
        Self::build(Some(difficulty), difficulty.layout(), alphabet, generator)
    }

    /// Session on a layout outside the built-in levels. The alphabet only has to cover this layout.
    pub fn with_layout(layout: BoardLayout, alphabet: Alphabet, generator: G) -> Result<Self> {
        Self::build(None, layout, alphabet, generator)
    }

    fn build(
        difficulty: Option<Difficulty>,
        layout: BoardLayout,
        alphabet: Alphabet,
        mut generator: G,
    ) -> Result<Self> {
        let board = generator.generate(layout, &alphabet)?;
        log::debug!("New session, difficulty: {:?}", difficulty);
        Ok(Self {
            generator,
            alphabet,
            difficulty,
            board,
            pending: Pending::new(),
            matched_pair_count: 0,
            attempt_count: 0,
            elapsed_seconds: 0,
            phase: Default::default(),
            best: BestScores::new(),
            last_pair: None,
        })
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pair_count(&self) -> CellCount {
        self.board.layout().pair_count
    }

    pub fn pending_selection(&self) -> &[CardId] {
        &self.pending
    }

    pub fn matched_pair_count(&self) -> CellCount {
        self.matched_pair_count
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn last_pair(&self) -> Option<&PairReveal> {
        self.last_pair.as_ref()
    }

    /// Best attempt count for the current difficulty.
    pub fn best_attempts(&self) -> Option<u32> {
        self.best.get(self.difficulty)
    }

    pub fn best_scores(&self) -> &BestScores {
        &self.best
    }

    /// Carries records over from an earlier session.
    pub fn set_best_scores(&mut self, best: BestScores) {
        self.best = best;
    }

    pub fn snapshot(&self) -> SessionState {
        let (rows, cols) = self.board.dims();
        SessionState {
            difficulty: self.difficulty,
            rows,
            cols,
            pair_count: self.pair_count(),
            cards: self.board.to_vec(),
            pending_selection: self.pending.to_vec(),
            matched_pair_count: self.matched_pair_count,
            attempt_count: self.attempt_count,
            elapsed_seconds: self.elapsed_seconds,
            is_active: self.phase.is_active(),
            is_complete: self.phase.is_complete(),
            best_attempts: self.best_attempts(),
            last_pair: self.last_pair.clone(),
        }
    }

    /// Turns a card face up, resolving the pair once two are up. Flips that the game state does not allow are
    /// ignored rather than reported, only an id outside the board is an error.
    pub fn flip(&mut self, card_id: CardId) -> Result<FlipOutcome> {
        let card = self.board.card(card_id)?;

        if self.phase.is_complete() || !card.is_selectable() || self.pending.len() >= 2 {
            log::trace!("Ignored flip of card {}", card_id);
            return Ok(FlipOutcome::Ignored);
        }

        self.mark_started();
        self.last_pair = None;
        self.board[card_id].is_flipped = true;
        self.pending.push(card_id);
        log::trace!("Flipped card {}, pending: {:?}", card_id, self.pending);

        if self.pending.len() < 2 {
            return Ok(FlipOutcome::Revealed { card: card_id });
        }
        Ok(self.resolve_pending())
    }

    /// Advances the clock by one second while a game is running. Returns whether time advanced.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Deals a new board on the current layout, keeping best scores.
    pub fn reset(&mut self) -> Result<()> {
        let layout = self.board.layout();
        self.redeal(self.difficulty, layout)
    }

    /// Switches level and deals a new board, keeping best scores.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.redeal(Some(difficulty), difficulty.layout())
    }

    fn redeal(&mut self, difficulty: Option<Difficulty>, layout: BoardLayout) -> Result<()> {
        let board = self.generator.generate(layout, &self.alphabet)?;
        if !self.pending.is_empty() {
            log::debug!("Discarding pending selection {:?}", self.pending);
        }

        self.difficulty = difficulty;
        self.board = board;
        self.pending.clear();
        self.matched_pair_count = 0;
        self.attempt_count = 0;
        self.elapsed_seconds = 0;
        self.phase = SessionPhase::Idle;
        self.last_pair = None;
        log::debug!("Dealt new board, difficulty: {:?}", difficulty);
        Ok(())
    }

    fn resolve_pending(&mut self) -> FlipOutcome {
        let (first, second) = (self.pending[0], self.pending[1]);
        self.pending.clear();
        self.attempt_count += 1;

        let matched = self.board[first].symbol == self.board[second].symbol;
        for id in [first, second] {
            let card = &mut self.board[id];
            if matched {
                card.is_matched = true;
            } else {
                card.is_flipped = false;
            }
        }
        self.last_pair = Some(PairReveal {
            first,
            second,
            first_symbol: self.board[first].symbol.clone(),
            second_symbol: self.board[second].symbol.clone(),
            matched,
        });

        if !matched {
            log::debug!("Mismatch {} / {}, attempt {}", first, second, self.attempt_count);
            return FlipOutcome::Mismatched { first, second };
        }

        self.matched_pair_count += 1;
        log::debug!(
            "Match {} / {}, {} of {} pairs, attempt {}",
            first,
            second,
            self.matched_pair_count,
            self.pair_count(),
            self.attempt_count
        );

        if self.matched_pair_count == self.pair_count() {
            let new_best = self.mark_complete();
            FlipOutcome::Completed {
                first,
                second,
                attempts: self.attempt_count,
                new_best,
            }
        } else {
            FlipOutcome::Matched { first, second }
        }
    }

    /// Checks if the phase is idle and changes to active, which also starts the clock
    fn mark_started(&mut self) {
        if matches!(self.phase, SessionPhase::Idle) {
            log::debug!("Session started");
            self.phase = SessionPhase::Active;
        }
    }

    fn mark_complete(&mut self) -> bool {
        self.phase = SessionPhase::Complete;
        let new_best = self.best.record(self.difficulty, self.attempt_count);
        log::debug!(
            "Completed in {} attempts and {}s, new best: {}",
            self.attempt_count,
            self.elapsed_seconds,
            new_best
        );
        new_best
    }
}

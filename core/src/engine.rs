use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> InProgress, on the first selection
/// - InProgress -> Won, when the final pair matches
/// - any -> Idle, on (re)initialization
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Idle,
    InProgress,
    Won,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Complete state of one memory game, from the dealt deck to the pending timers.
///
/// All waiting is delegated to the [`Scheduler`]: fired tasks come back through [`MemoryGame::on_timer`].
pub struct MemoryGame<S: Scheduler> {
    catalog: SymbolCatalog,
    config: GameConfig,
    shuffler: Box<dyn Shuffler>,
    scheduler: S,
    deck: Deck,
    cards: Vec<CardState>,
    first: Option<CardIndex>,
    second: Option<CardIndex>,
    locked: bool,
    moves: u32,
    matches: CardCount,
    seconds: u32,
    state: GameState,
    epoch: u32,
    ticker: Option<S::Handle>,
    pending_flip_back: Option<S::Handle>,
    pending_win: Option<S::Handle>,
    win_announced: bool,
    events: VecDeque<GameEvent>,
}

impl<S: Scheduler> MemoryGame<S> {
    pub fn new(
        catalog: SymbolCatalog,
        config: GameConfig,
        mut shuffler: impl Shuffler + 'static,
        scheduler: S,
    ) -> Result<Self> {
        let deck = Deck::deal(&catalog, &config, &mut shuffler)?;
        Self::with_deck(catalog, config, deck, shuffler, scheduler)
    }

    /// Starts on an explicit first board, later boards are dealt by `shuffler`.
    ///
    /// The deck must hold exactly `config.total_cards()` cards.
    pub fn with_deck(
        catalog: SymbolCatalog,
        config: GameConfig,
        deck: Deck,
        shuffler: impl Shuffler + 'static,
        scheduler: S,
    ) -> Result<Self> {
        config.validate()?;
        if deck.total_cards() != config.total_cards() {
            return Err(GameError::InvalidLayout);
        }

        let cards = vec![CardState::FaceDown; usize::from(deck.total_cards())];
        log::debug!("New game, {} cards", cards.len());

        Ok(Self {
            catalog,
            config,
            shuffler: Box::new(shuffler),
            scheduler,
            deck,
            cards,
            first: None,
            second: None,
            locked: false,
            moves: 0,
            matches: 0,
            seconds: 0,
            state: GameState::Idle,
            epoch: 0,
            ticker: None,
            pending_flip_back: None,
            pending_win: None,
            win_announced: false,
            events: VecDeque::new(),
        })
    }

    /// Deals a new board of `size * size` cells, discarding the current one along with its pending timers.
    ///
    /// On a configuration error the current board is kept untouched.
    pub fn initialize(&mut self, size: Coord) -> Result<()> {
        let config = self.config.with_size(size);
        let deck = Deck::deal(&self.catalog, &config, &mut *self.shuffler)?;

        self.cancel_timers();
        self.epoch = self.epoch.wrapping_add(1);
        self.config = config;
        self.cards = vec![CardState::FaceDown; usize::from(deck.total_cards())];
        self.deck = deck;
        self.reset_turn();
        self.moves = 0;
        self.matches = 0;
        self.seconds = 0;
        self.state = GameState::Idle;
        self.win_announced = false;
        self.events.clear();

        log::debug!(
            "Initialized {}x{} board, {} cards, epoch {}",
            size,
            size,
            self.cards.len(),
            self.epoch
        );
        Ok(())
    }

    /// Deals a new board with the current size.
    pub fn restart(&mut self) -> Result<()> {
        self.initialize(self.config.size)
    }

    /// Flips the card at `index`, resolving the turn when it is the second card.
    ///
    /// Selections while locked, after the win, out of range or on revealed cards are ignored.
    pub fn select_card(&mut self, index: CardIndex) -> SelectOutcome {
        use SelectOutcome::*;

        if self.locked || self.state.is_won() {
            log::trace!("Ignored selection of {}, board locked", index);
            return Ignored;
        }

        let Some(card) = self.cards.get(usize::from(index)).copied() else {
            log::trace!("Ignored selection of {}, out of range", index);
            return Ignored;
        };
        if !card.is_selectable() {
            log::trace!("Ignored selection of {}, already {:?}", index, card);
            return Ignored;
        }

        if self.moves == 0 && self.ticker.is_none() {
            self.start_clock();
        }

        self.set_card(index, CardState::FaceUp);

        let Some(first) = self.first else {
            self.first = Some(index);
            return Flipped;
        };

        self.second = Some(index);
        self.locked = true;
        self.moves = self.moves.saturating_add(1);

        if self.deck.symbol_at(first) == self.deck.symbol_at(index) {
            self.resolve_match(first, index)
        } else {
            log::debug!("Mismatch {} / {}, move {}", first, index, self.moves);
            let delay = self.config.timings.flip_back;
            self.pending_flip_back = Some(self.schedule_once(delay, TimerKind::FlipBack));
            Mismatched
        }
    }

    /// Delivers a fired timer, tasks scheduled for a previous board are ignored.
    pub fn on_timer(&mut self, task: TimerTask) {
        if task.epoch != self.epoch {
            log::trace!("Ignored stale {:?}, current epoch {}", task, self.epoch);
            return;
        }

        match task.kind {
            TimerKind::Tick => self.tick(),
            TimerKind::FlipBack => self.flip_back(),
            TimerKind::AnnounceWin => self.announce_win(),
        }
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn card_view(&self, index: CardIndex) -> Option<CardView> {
        let state = self.card_state(index)?;
        let symbol = self.deck.symbol_at(index)?;
        Some(CardView::new(state, symbol))
    }

    pub fn card_state(&self, index: CardIndex) -> Option<CardState> {
        self.cards.get(usize::from(index)).copied()
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView> + '_ {
        self.cards
            .iter()
            .zip(self.deck.symbols())
            .map(|(&state, symbol)| CardView::new(state, symbol))
    }

    pub fn face_up_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|&&state| state == CardState::FaceUp)
            .count()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> CardCount {
        self.matches
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_clock_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn total_cards(&self) -> CardCount {
        self.deck.total_cards()
    }

    pub fn needed_pairs(&self) -> CardCount {
        self.deck.total_cards() / 2
    }

    /// Board generation, bumped by every (re)initialization.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn resolve_match(&mut self, first: CardIndex, second: CardIndex) -> SelectOutcome {
        self.set_card(first, CardState::Matched);
        self.set_card(second, CardState::Matched);
        self.matches += 1;
        self.reset_turn();
        self.events.push_back(GameEvent::PairResolved {
            first,
            second,
            outcome: PairOutcome::Match,
        });
        log::debug!(
            "Matched {} / {}, {} of {} pairs in {} moves",
            first,
            second,
            self.matches,
            self.needed_pairs(),
            self.moves
        );

        if self.matches == self.needed_pairs() {
            self.mark_won();
            SelectOutcome::Completed
        } else {
            SelectOutcome::Matched
        }
    }

    fn start_clock(&mut self) {
        let period = self.config.timings.tick;
        let task = TimerTask::new(TimerKind::Tick, self.epoch);
        self.ticker = Some(self.scheduler.schedule_repeating(period, task));
        self.state = GameState::InProgress;
        log::debug!("Clock started");
    }

    fn stop_clock(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn mark_won(&mut self) {
        if self.state.is_won() {
            return;
        }

        self.state = GameState::Won;
        self.stop_clock();
        let delay = self.config.timings.win_grace;
        self.pending_win = Some(self.schedule_once(delay, TimerKind::AnnounceWin));
        log::debug!("Won in {} moves, {} seconds", self.moves, self.seconds);
    }

    fn tick(&mut self) {
        if !matches!(self.state, GameState::InProgress) {
            return;
        }

        self.seconds = self.seconds.saturating_add(1);
        self.events.push_back(GameEvent::Tick {
            seconds: self.seconds,
        });
        log::trace!("Tick {}", self.seconds);
    }

    fn flip_back(&mut self) {
        if let Some(handle) = self.pending_flip_back.take() {
            self.scheduler.cancel(handle);
        }

        let (Some(first), Some(second)) = (self.first, self.second) else {
            return;
        };

        self.set_card(first, CardState::FaceDown);
        self.set_card(second, CardState::FaceDown);
        self.reset_turn();
        self.events.push_back(GameEvent::PairResolved {
            first,
            second,
            outcome: PairOutcome::Mismatch,
        });
        log::trace!("Flipped back {} / {}", first, second);
    }

    fn announce_win(&mut self) {
        if let Some(handle) = self.pending_win.take() {
            self.scheduler.cancel(handle);
        }

        if !self.state.is_won() || self.win_announced {
            return;
        }

        self.win_announced = true;
        self.events.push_back(GameEvent::Won {
            moves: self.moves,
            seconds: self.seconds,
        });
    }

    fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> S::Handle {
        self.scheduler
            .schedule_once(delay, TimerTask::new(kind, self.epoch))
    }

    fn cancel_timers(&mut self) {
        self.stop_clock();
        for handle in [self.pending_flip_back.take(), self.pending_win.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(handle);
        }
    }

    fn reset_turn(&mut self) {
        self.first = None;
        self.second = None;
        self.locked = false;
    }

    fn set_card(&mut self, index: CardIndex, state: CardState) {
        self.cards[usize::from(index)] = state;
    }
}

impl MemoryGame<ManualScheduler> {
    /// Moves the virtual clock forward by `duration`, delivering every task that falls due on the way.
    pub fn advance(&mut self, duration: Duration) {
        let until = self.scheduler.now() + duration;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.on_timer(task);
        }
        self.scheduler.set_now(until);
    }
}

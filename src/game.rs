//! Game state machine driven by button input and the event queue
use crate::config::{ConfigError, ExpiryPolicy, GameConfig, QUEUE_CAPACITY, SLOT_COUNT};
use crate::diagnostics::{CoreError, Diagnostics};
use crate::drivers::{ButtonScanner, MoleBoard, MoleSlotTable};
use crate::os::Clock;
use crate::random::RandomSource;
use crate::scheduler::{EventKind, EventQueue, Generation, MoleToken, TimedEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Stopped,
    Running,
    Won,
    Lost,
}

impl GameState {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::Stopped => "stopped",
            GameState::Running => "running",
            GameState::Won => "won",
            GameState::Lost => "lost",
        }
    }
}

/// State change made during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
    pub at: u32,
}

/// Everything the game owns: state, pending events, slot occupancy and
/// the button view. Driven by calling [`GameCore::tick`] from the control loop.
pub struct GameCore<R, const N: usize = SLOT_COUNT, const Q: usize = QUEUE_CAPACITY> {
    config: GameConfig,
    state: GameState,
    queue: EventQueue<Q>,
    slots: MoleSlotTable<N>,
    buttons: ButtonScanner<N>,
    generation: Generation,
    rng: R,
    score: u16,
    diagnostics: Diagnostics,
}

impl<R: RandomSource, const N: usize, const Q: usize> GameCore<R, N, Q> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: GameState::Stopped,
            queue: EventQueue::new(),
            slots: MoleSlotTable::new(),
            buttons: ButtonScanner::new(config.debounce_ms),
            generation: Generation::new(),
            rng,
            score: 0,
            diagnostics: Diagnostics::new(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn queue(&self) -> &EventQueue<Q> {
        &self.queue
    }

    pub fn slots(&self) -> &MoleSlotTable<N> {
        &self.slots
    }

    /// Moles whacked in the current game
    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Runs one control loop iteration: scan buttons, then let the current
    /// state act on them and on any due events.
    pub fn tick<B: MoleBoard, C: Clock>(&mut self, board: &mut B, clock: &C) -> Option<Transition> {
        let now = clock.now_millis();
        self.buttons.scan(board, now);

        let next = match self.state {
            GameState::Stopped => self.tick_stopped(board, now),
            GameState::Running => self.tick_running(board, now),
            GameState::Won | GameState::Lost => self.tick_finished(),
        }?;

        let from = self.state;
        self.state = next;
        Some(Transition { from, to: next, at: now })
    }

    fn tick_stopped<B: MoleBoard>(&mut self, board: &mut B, now: u32) -> Option<GameState> {
        if !self.buttons.any_just_pressed() {
            return None;
        }

        self.start(board, now);
        Some(GameState::Running)
    }

    fn tick_finished(&mut self) -> Option<GameState> {
        self.buttons.any_just_pressed().then_some(GameState::Stopped)
    }

    fn start<B: MoleBoard>(&mut self, board: &mut B, now: u32) {
        self.queue.clear();
        self.slots.reset_all(board);
        self.generation.reset();
        self.score = 0;
        self.rng.reseed(now);

        let first_pop = TimedEvent::mole_pop(now.wrapping_add(self.config.delay_time_ms));
        self.schedule(first_pop, now);
    }

    fn tick_running<B: MoleBoard>(&mut self, board: &mut B, now: u32) -> Option<GameState> {
        for slot in 0..N {
            if self.buttons.is_pressed(slot) && self.slots.vacate(board, slot).is_some() {
                self.score = self.score.saturating_add(1);
            }
        }

        if let Some(target) = self.config.win_score {
            if self.score >= target {
                return Some(GameState::Won);
            }
        }

        while let Some(event) = self.queue.pop_due(now) {
            match event.kind() {
                EventKind::MolePop => self.handle_pop(board, now),
                EventKind::MoleExpired { token } => {
                    if self.expiry_loses(token) {
                        return Some(GameState::Lost);
                    }
                }
            }
        }

        None
    }

    fn handle_pop<B: MoleBoard>(&mut self, board: &mut B, now: u32) {
        // Re-arm before spawning so the pop chain survives a full queue
        let next_pop = TimedEvent::mole_pop(now.wrapping_add(self.config.delay_time_ms));
        self.schedule(next_pop, now);

        if !self.rng.chance_percent(self.config.mole_pop_prob) {
            return;
        }

        let token = self.generation.peek();
        let expiry = TimedEvent::mole_expired(now.wrapping_add(self.config.mole_expire_delay_ms), token);
        if self.queue.is_full() {
            self.diagnostics.report(CoreError::QueueFull { kind: expiry.kind().code() }, now);
            return;
        }

        let empty = self.slots.empty_count();
        if empty == 0 {
            return;
        }
        let pick = self.rng.below(empty as u32) as usize;
        let Some(slot) = self.slots.nth_empty(pick) else {
            return;
        };

        if let Err(err) = self.slots.occupy(board, slot, token) {
            self.diagnostics.report(err, now);
            return;
        }
        self.generation.issue();
        self.schedule(expiry, now);
    }

    fn expiry_loses(&self, token: MoleToken) -> bool {
        match self.config.expiry_policy {
            // Known defect kept for compatibility: a mole that was already
            // whacked still ends the game when its timer runs out.
            ExpiryPolicy::Unconditional => true,
            ExpiryPolicy::OccupiedOnly => self.slots.find(token).is_some(),
        }
    }

    fn schedule(&mut self, event: TimedEvent, now: u32) {
        if let Err(full) = self.queue.insert(event) {
            self.diagnostics.report(full.into(), now);
        }
    }
}

use core::num::NonZeroU32;

/// Generation token of a spawned mole. Zero is never a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoleToken(NonZeroU32);

impl MoleToken {
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Opportunity to spawn a mole
    MolePop,
    /// The mole spawned with this token has run out of time
    MoleExpired { token: MoleToken },
}

impl EventKind {
    pub const fn code(&self) -> u8 {
        match self {
            EventKind::MolePop => 1,
            EventKind::MoleExpired { .. } => 2,
        }
    }
}

/// An event due at `fire_time` milliseconds. Never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEvent {
    fire_time: u32,
    kind: EventKind,
}

impl TimedEvent {
    pub const fn new(fire_time: u32, kind: EventKind) -> Self {
        Self { fire_time, kind }
    }

    pub const fn mole_pop(fire_time: u32) -> Self {
        Self::new(fire_time, EventKind::MolePop)
    }

    pub const fn mole_expired(fire_time: u32, token: MoleToken) -> Self {
        Self::new(fire_time, EventKind::MoleExpired { token })
    }

    #[inline]
    pub const fn fire_time(&self) -> u32 {
        self.fire_time
    }

    #[inline]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    pub const fn mole_token(&self) -> Option<MoleToken> {
        match self.kind {
            EventKind::MoleExpired { token } => Some(token),
            EventKind::MolePop => None,
        }
    }

    /// Plain comparison, the millisecond clock is assumed not to wrap
    /// within a session.
    #[inline]
    pub const fn is_due(&self, now: u32) -> bool {
        self.fire_time <= now
    }
}

/// Source of mole tokens for one game, starting at 1.
#[derive(Debug, Clone, Copy)]
pub struct Generation {
    next: u32,
}

impl Generation {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }

    /// Token the next spawned mole will get.
    pub fn peek(&self) -> MoleToken {
        MoleToken(NonZeroU32::new(self.next).unwrap_or(NonZeroU32::MIN))
    }

    /// Hands out the next token and advances the counter.
    pub fn issue(&mut self) -> MoleToken {
        let token = self.peek();
        self.next = self.next.wrapping_add(1).max(1);
        token
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration constants and game tuning for the whack-a-mole firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Number of button/LED pairs on the board
pub const SLOT_COUNT: usize = 4;

/// One pending pop plus a pop and an expiry per slot
pub const QUEUE_CAPACITY: usize = SLOT_COUNT * 2 + 1;

/// Milliseconds between pop opportunities
pub const DELAY_TIME_MS: u32 = 600;

/// Percent chance that a pop opportunity spawns a mole
pub const MOLE_POP_PROB: u8 = 40;

/// Milliseconds a mole stays up before the player loses
pub const MOLE_EXPIRE_DELAY_MS: u32 = 1500;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u16 = 50;

/// Power-on seed, mixed with the start press time of every game
pub const RNG_SEED: u32 = 0x2545_F491;

/// Watchdog timeout period in milliseconds
pub const WDT_TIMEOUT_MS: u16 = 1000;

/// What a fired expiry event means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Every expiry ends the game, even when its mole was already whacked.
    Unconditional,
    /// Only an expiry whose mole still occupies a slot ends the game.
    OccupiedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDelayTime,
    ZeroExpireDelay,
    ProbabilityOutOfRange(u8),
}

/// Runtime tuning of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub delay_time_ms: u32,
    pub mole_pop_prob: u8,
    pub mole_expire_delay_ms: u32,
    pub debounce_ms: u16,
    pub expiry_policy: ExpiryPolicy,
    pub win_score: Option<u16>,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        delay_time_ms: DELAY_TIME_MS,
        mole_pop_prob: MOLE_POP_PROB,
        mole_expire_delay_ms: MOLE_EXPIRE_DELAY_MS,
        debounce_ms: BUTTON_DEBOUNCE_MS,
        expiry_policy: ExpiryPolicy::Unconditional,
        win_score: None,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    pub const fn with_delay_time(mut self, delay_time_ms: u32) -> Self {
        self.delay_time_ms = delay_time_ms;
        self
    }

    pub const fn with_pop_probability(mut self, percent: u8) -> Self {
        self.mole_pop_prob = percent;
        self
    }

    pub const fn with_expire_delay(mut self, mole_expire_delay_ms: u32) -> Self {
        self.mole_expire_delay_ms = mole_expire_delay_ms;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u16) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    pub const fn with_win_score(mut self, score: u16) -> Self {
        self.win_score = Some(score);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_time_ms == 0 {
            return Err(ConfigError::ZeroDelayTime);
        }
        if self.mole_expire_delay_ms == 0 {
            return Err(ConfigError::ZeroExpireDelay);
        }
        if self.mole_pop_prob > 100 {
            return Err(ConfigError::ProbabilityOutOfRange(self.mole_pop_prob));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::DEFAULT.expiry_policy, ExpiryPolicy::Unconditional);
        assert_eq!(GameConfig::DEFAULT.win_score, None);
    }

    #[test]
    fn queue_capacity_covers_every_slot() {
        assert!(QUEUE_CAPACITY >= SLOT_COUNT * 2 + 1);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = GameConfig::new().with_pop_probability(101);
        assert_eq!(config.validate(), Err(ConfigError::ProbabilityOutOfRange(101)));

        let config = GameConfig::new().with_delay_time(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDelayTime));

        let config = GameConfig::new().with_expire_delay(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroExpireDelay));
    }

    #[test]
    fn builder_sets_fields() {
        let config = GameConfig::new()
            .with_delay_time(100)
            .with_pop_probability(100)
            .with_expire_delay(900)
            .with_debounce_ms(20)
            .with_expiry_policy(ExpiryPolicy::OccupiedOnly)
            .with_win_score(10);

        assert_eq!(config.delay_time_ms, 100);
        assert_eq!(config.mole_pop_prob, 100);
        assert_eq!(config.mole_expire_delay_ms, 900);
        assert_eq!(config.debounce_ms, 20);
        assert_eq!(config.expiry_policy, ExpiryPolicy::OccupiedOnly);
        assert_eq!(config.win_score, Some(10));
    }
}

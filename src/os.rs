//! Time source for the game core

/// Monotonic millisecond counter
pub trait Clock {
    fn now_millis(&self) -> u32;
}

/// Millisecond clock driven by the Timer0 compare interrupt.
#[cfg(target_arch = "avr")]
pub struct SystemClock {
    _private: (),
}

#[cfg(target_arch = "avr")]
impl SystemClock {
    /// Starts Timer0 and returns a handle onto its millisecond counter.
    pub fn start(tc0: avr_device::atmega128a::TC0) -> Self {
        crate::hal::timer::init_millis(tc0);
        Self { _private: () }
    }
}

#[cfg(target_arch = "avr")]
impl Clock for SystemClock {
    #[inline]
    fn now_millis(&self) -> u32 {
        crate::hal::timer::millis()
    }
}

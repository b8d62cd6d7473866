//! Host-side fakes for exercising the game core without hardware
use crate::drivers::MoleBoard;
use crate::os::Clock;
use crate::random::RandomSource;
use core::cell::Cell;

/// Buttons set by the test, LEDs recorded as last written.
pub struct FakeBoard<const N: usize> {
    buttons: [bool; N],
    leds: [bool; N],
    led_writes: usize,
}

impl<const N: usize> FakeBoard<N> {
    pub fn new() -> Self {
        Self {
            buttons: [false; N],
            leds: [false; N],
            led_writes: 0,
        }
    }

    pub fn press(&mut self, slot: usize) {
        self.buttons[slot] = true;
    }

    pub fn release(&mut self, slot: usize) {
        self.buttons[slot] = false;
    }

    pub fn led(&self, slot: usize) -> bool {
        self.leds[slot]
    }

    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|&&on| on).count()
    }

    pub fn led_writes(&self) -> usize {
        self.led_writes
    }
}

impl<const N: usize> MoleBoard for FakeBoard<N> {
    fn read_button(&mut self, slot: usize) -> bool {
        self.buttons.get(slot).copied().unwrap_or(false)
    }

    fn write_led(&mut self, slot: usize, on: bool) {
        self.leds[slot] = on;
        self.led_writes += 1;
    }
}

pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u32 {
        self.now.get()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

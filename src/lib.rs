//! Control core for a four-button whack-a-mole board.
//!
//! The game logic is hardware independent: it talks to buttons and LEDs via
//! [`drivers::MoleBoard`], reads time via [`os::Clock`] and draws randomness
//! from [`random::RandomSource`]. The AVR specific pieces live in `hal` and
//! are only compiled for the microcontroller.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod game;
pub mod os;
pub mod random;
pub mod scheduler;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, ExpiryPolicy, GameConfig};
pub use diagnostics::{CoreError, Diagnostics, ErrorCode, Fault};
pub use game::{GameCore, GameState, Transition};
pub use scheduler::{EventKind, EventQueue, MoleToken, QueueFull, TimedEvent};

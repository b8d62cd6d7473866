pub mod gpio;
pub mod timer;
pub mod uart;
pub mod watchdog;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use timer::millis;
pub use uart::Uart;
pub use watchdog::{Watchdog, WatchdogTimeout};

pub mod board;
pub mod button_handler;
pub mod mole_slots;
pub mod serial_console;

pub use board::{MoleBoard, PinBoard};
pub use button_handler::ButtonScanner;
pub use mole_slots::MoleSlotTable;
pub use serial_console::SerialConsole;

//! Timer0 millisecond counter
use crate::config::CPU_FREQ_HZ;
use avr_device::atmega128a::TC0;
use avr_device::interrupt::Mutex;
use core::cell::Cell;

// Timer0 on the ATmega128 has its own prescaler table: CS0 = 0b100 is clk/64
const PRESCALER: u32 = 64;
const PRESCALER_BITS: u8 = 0b100;
const WGM01_CTC: u8 = 1 << 3;
const OCIE0: u8 = 1 << 1;
const TIMER_COUNTS: u32 = CPU_FREQ_HZ / PRESCALER / 1000;

static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Configures Timer0 for a compare match every millisecond.
pub fn init_millis(tc0: TC0) {
    unsafe {
        tc0.tccr0.write(|w| w.bits(WGM01_CTC | PRESCALER_BITS));
        tc0.ocr0.write(|w| w.bits((TIMER_COUNTS - 1) as u8));
        tc0.tcnt0.write(|w| w.bits(0));
        tc0.timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
    }

    avr_device::interrupt::free(|cs| MILLIS_COUNTER.borrow(cs).set(0));
}

/// Milliseconds since `init_millis`
pub fn millis() -> u32 {
    avr_device::interrupt::free(|cs| MILLIS_COUNTER.borrow(cs).get())
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    avr_device::interrupt::free(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

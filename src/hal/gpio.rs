use avr_device::atmega128a::{PORTA, PORTB};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub struct Unconfigured;
pub struct Input;
pub struct Output;

/// One bit of an I/O port. The bit is kept at runtime so pins of a port
/// share a type and fit in an array.
pub struct Pin<PORT, MODE> {
    bit: u8,
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, MODE> Pin<PORT, MODE> {
    #[inline]
    fn mask(&self) -> u8 {
        1 << self.bit
    }

    fn retype<NEW>(self) -> Pin<PORT, NEW> {
        Pin {
            bit: self.bit,
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $port:ident, $ddr:ident, $pin:ident) => {
        impl<MODE> Pin<$PORT, MODE> {
            pub fn into_output(self) -> Pin<$PORT, Output> {
                let mask = self.mask();
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | mask));
                }
                self.retype()
            }

            /// Input with the internal pull-up enabled
            pub fn into_pull_up_input(self) -> Pin<$PORT, Input> {
                let mask = self.mask();
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !mask));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | mask));
                }
                self.retype()
            }
        }

        impl InputPin for Pin<$PORT, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Self::Error> {
                let level = unsafe { (*$PORT::ptr()).$pin.read().bits() };
                Ok(level & self.mask() != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Self::Error> {
                self.is_high().map(|high| !high)
            }
        }

        impl OutputPin for Pin<$PORT, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Self::Error> {
                let mask = self.mask();
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | mask));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Self::Error> {
                let mask = self.mask();
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !mask));
                }
                Ok(())
            }
        }
    };
}

impl_port!(PORTA, porta, ddra, pina);
impl_port!(PORTB, portb, ddrb, pinb);

// BigAVR2 board wiring: LEDs on PORTA, buttons on PORTB
pub mod board {
    use super::*;
    use crate::config::SLOT_COUNT;

    fn pins<PORT>() -> [Pin<PORT, Unconfigured>; SLOT_COUNT] {
        core::array::from_fn(|bit| Pin {
            bit: bit as u8,
            _port: PhantomData,
            _mode: PhantomData,
        })
    }

    /// LED0..LED3 as outputs, all off
    pub fn leds(_port: PORTA) -> [Pin<PORTA, Output>; SLOT_COUNT] {
        pins::<PORTA>().map(|pin| {
            let mut led = pin.into_output();
            led.set_low().ok();
            led
        })
    }

    /// BTN0..BTN3, active low
    pub fn buttons(_port: PORTB) -> [Pin<PORTB, Input>; SLOT_COUNT] {
        pins::<PORTB>().map(|pin| pin.into_pull_up_input())
    }
}

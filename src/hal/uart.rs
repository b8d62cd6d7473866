use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UDRE0: u8 = 1 << 5;
const TXC0: u8 = 1 << 6;
const TXEN0: u8 = 1 << 3;
// 8 data bits, no parity, 1 stop bit
const UCSZ_8N1: u8 = 0b11 << 1;

/// Transmit-only USART0, polled.
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            usart.ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            usart.ubrr0l.write(|w| w.bits(UBRR as u8));
            usart.ucsr0c.write(|w| w.bits(UCSZ_8N1));
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { usart }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.usart.ucsr0a.read().bits() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if self.usart.ucsr0a.read().bits() & TXC0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}

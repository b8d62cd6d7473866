use crate::diagnostics::Fault;
use crate::game::Transition;
use embedded_hal::serial::Write;
use ufmt::{uWrite, uwrite};

/// Line oriented text output over a blocking serial transmitter.
pub struct SerialConsole<W> {
    tx: W,
}

impl<W: Write<u8>> SerialConsole<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        nb::block!(self.tx.write(byte))
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn write_hex(&mut self, val: u16) -> Result<(), W::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        for shift in [12, 8, 4, 0] {
            self.write_byte(HEX_CHARS[((val >> shift) & 0xF) as usize])?;
        }
        Ok(())
    }

    /// `[<ms>] <from> -> <to>`
    pub fn report_transition(&mut self, transition: &Transition) -> Result<(), W::Error> {
        uwrite!(
            self,
            "[{}] {} -> {}",
            transition.at,
            transition.from.as_str(),
            transition.to.as_str()
        )?;
        self.write_str("\r\n")
    }

    /// `[<ms>] FAULT 0x<code> <name> data=<n>`
    pub fn report_fault(&mut self, fault: &Fault) -> Result<(), W::Error> {
        uwrite!(self, "[{}] FAULT 0x", fault.timestamp)?;
        self.write_hex(fault.code as u16)?;
        uwrite!(self, " {} data={}", fault.code.as_str(), fault.data)?;
        self.write_str("\r\n")
    }

    pub fn flush(&mut self) -> Result<(), W::Error> {
        nb::block!(self.tx.flush())
    }

    pub fn release(self) -> W {
        self.tx
    }
}

impl<W: Write<u8>> uWrite for SerialConsole<W> {
    type Error = W::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

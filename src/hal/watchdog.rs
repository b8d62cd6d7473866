use avr_device::atmega128a::WDT;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum WatchdogTimeout {
    Ms16 = 0,
    Ms32 = 1,
    Ms64 = 2,
    Ms125 = 3,
    Ms250 = 4,
    Ms500 = 5,
    Ms1000 = 6,
    Ms2000 = 7,
}

impl WatchdogTimeout {
    /// Shortest timeout that is at least `ms` long
    pub const fn at_least(ms: u16) -> Self {
        match ms {
            0..=16 => Self::Ms16,
            17..=32 => Self::Ms32,
            33..=64 => Self::Ms64,
            65..=125 => Self::Ms125,
            126..=250 => Self::Ms250,
            251..=500 => Self::Ms500,
            501..=1000 => Self::Ms1000,
            _ => Self::Ms2000,
        }
    }
}

pub struct Watchdog {
    wdt: WDT,
}

impl Watchdog {
    pub fn new(wdt: WDT) -> Self {
        Self { wdt }
    }

    pub fn start(&mut self, timeout: WatchdogTimeout) {
        unsafe {
            // Enable change bit and system reset mode
            self.wdt.wdtcr.write(|w| w.bits(0x18));
            // Set timeout and enable watchdog
            self.wdt.wdtcr.write(|w| w.bits(0x08 | timeout as u8));
        }
    }

    #[inline]
    pub fn feed(&mut self) {
        avr_device::asm::wdr();
    }
}

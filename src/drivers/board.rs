use embedded_hal::digital::v2::{InputPin, OutputPin};

/// Level access to the button/LED pairs, one per mole slot.
pub trait MoleBoard {
    /// True while the button of `slot` is held down
    fn read_button(&mut self, slot: usize) -> bool;
    fn write_led(&mut self, slot: usize, on: bool);
}

/// Board made of plain GPIO pins, button `i` paired with LED `i`.
pub struct PinBoard<B, L, const N: usize> {
    buttons: [B; N],
    leds: [L; N],
    active_low: bool,
}

impl<B, L, const N: usize> PinBoard<B, L, N>
where
    B: InputPin,
    L: OutputPin,
{
    /// Buttons are active low, pulled up and shorted to ground when pressed
    pub fn new(buttons: [B; N], leds: [L; N]) -> Self {
        Self {
            buttons,
            leds,
            active_low: true,
        }
    }

    pub fn active_high(mut self) -> Self {
        self.active_low = false;
        self
    }

    pub fn release(self) -> ([B; N], [L; N]) {
        (self.buttons, self.leds)
    }
}

impl<B, L, const N: usize> MoleBoard for PinBoard<B, L, N>
where
    B: InputPin,
    L: OutputPin,
{
    fn read_button(&mut self, slot: usize) -> bool {
        let Some(button) = self.buttons.get(slot) else {
            return false;
        };
        let level = if self.active_low {
            button.is_low()
        } else {
            button.is_high()
        };
        level.unwrap_or(false)
    }

    fn write_led(&mut self, slot: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(slot) {
            if on {
                led.set_high().ok();
            } else {
                led.set_low().ok();
            }
        }
    }
}

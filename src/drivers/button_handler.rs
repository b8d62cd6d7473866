use super::board::MoleBoard;

/// Debounced view of the slot buttons, refreshed once per tick.
pub struct ButtonScanner<const N: usize> {
    states: [bool; N],
    just_pressed: [bool; N],
    pending_since: [Option<u32>; N],
    debounce_ms: u32,
}

impl<const N: usize> ButtonScanner<N> {
    pub const fn new(debounce_ms: u16) -> Self {
        Self {
            states: [false; N],
            just_pressed: [false; N],
            pending_since: [None; N],
            debounce_ms: debounce_ms as u32,
        }
    }

    /// Reads every button once. A new level is accepted once it has held
    /// for `debounce_ms` without falling back to the accepted one.
    pub fn scan<B: MoleBoard>(&mut self, board: &mut B, now: u32) {
        for idx in 0..N {
            self.just_pressed[idx] = false;
            let raw_state = board.read_button(idx);

            if raw_state == self.states[idx] {
                self.pending_since[idx] = None;
                continue;
            }

            let since = *self.pending_since[idx].get_or_insert(now);
            if now.wrapping_sub(since) >= self.debounce_ms {
                self.states[idx] = raw_state;
                self.pending_since[idx] = None;
                self.just_pressed[idx] = raw_state;
            }
        }
    }

    pub fn is_pressed(&self, slot: usize) -> bool {
        self.states.get(slot).copied().unwrap_or(false)
    }

    /// Pressed on this scan, released before
    pub fn just_pressed(&self, slot: usize) -> bool {
        self.just_pressed.get(slot).copied().unwrap_or(false)
    }

    pub fn any_just_pressed(&self) -> bool {
        self.just_pressed.iter().any(|&pressed| pressed)
    }
}

impl<const N: usize> Default for ButtonScanner<N> {
    fn default() -> Self {
        Self::new(crate::config::BUTTON_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBoard;

    #[test]
    fn immediate_without_debounce() {
        let mut board = FakeBoard::<4>::new();
        let mut scanner = ButtonScanner::<4>::new(0);

        board.press(2);
        scanner.scan(&mut board, 0);
        assert!(scanner.is_pressed(2));
        assert!(scanner.just_pressed(2));
        assert!(scanner.any_just_pressed());

        scanner.scan(&mut board, 0);
        assert!(scanner.is_pressed(2));
        assert!(!scanner.just_pressed(2));
        assert!(!scanner.any_just_pressed());
    }

    #[test]
    fn fast_scans_do_not_count_as_time() {
        let mut board = FakeBoard::<4>::new();
        let mut scanner = ButtonScanner::<4>::default();

        board.press(0);
        for _ in 0..100 {
            scanner.scan(&mut board, 1000);
        }
        assert!(!scanner.is_pressed(0));

        scanner.scan(&mut board, 1049);
        assert!(!scanner.is_pressed(0));
        scanner.scan(&mut board, 1050);
        assert!(scanner.is_pressed(0));
        assert!(scanner.just_pressed(0));
    }

    #[test]
    fn bounce_restarts_the_wait() {
        let mut board = FakeBoard::<4>::new();
        let mut scanner = ButtonScanner::<4>::new(30);

        board.press(0);
        scanner.scan(&mut board, 0);
        board.release(0);
        scanner.scan(&mut board, 10);
        board.press(0);
        scanner.scan(&mut board, 20);
        scanner.scan(&mut board, 40);
        assert!(!scanner.is_pressed(0));

        scanner.scan(&mut board, 50);
        assert!(scanner.is_pressed(0));
        assert!(scanner.just_pressed(0));
    }

    #[test]
    fn release_is_not_a_press_edge() {
        let mut board = FakeBoard::<4>::new();
        let mut scanner = ButtonScanner::<4>::new(0);

        board.press(1);
        scanner.scan(&mut board, 0);
        board.release(1);
        scanner.scan(&mut board, 0);

        assert!(!scanner.is_pressed(1));
        assert!(!scanner.any_just_pressed());
    }

    #[test]
    fn out_of_range_slot_reads_released() {
        let scanner = ButtonScanner::<4>::new(0);
        assert!(!scanner.is_pressed(9));
        assert!(!scanner.just_pressed(9));
    }
}

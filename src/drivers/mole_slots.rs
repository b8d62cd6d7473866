use super::board::MoleBoard;
use crate::diagnostics::CoreError;
use crate::scheduler::MoleToken;

/// Occupancy of each slot. A slot's LED is lit exactly when it holds a token.
pub struct MoleSlotTable<const N: usize> {
    occupants: [Option<MoleToken>; N],
}

impl<const N: usize> MoleSlotTable<N> {
    pub const fn new() -> Self {
        Self {
            occupants: [None; N],
        }
    }

    pub fn occupy<B: MoleBoard>(
        &mut self,
        board: &mut B,
        slot: usize,
        token: MoleToken,
    ) -> Result<(), CoreError> {
        let occupant = self
            .occupants
            .get_mut(slot)
            .ok_or(CoreError::SlotOutOfRange { slot })?;
        if occupant.is_some() {
            return Err(CoreError::SlotOccupied { slot });
        }

        *occupant = Some(token);
        board.write_led(slot, true);
        Ok(())
    }

    /// Empties `slot` and returns the mole that was there. An empty or
    /// unknown slot is left alone.
    pub fn vacate<B: MoleBoard>(&mut self, board: &mut B, slot: usize) -> Option<MoleToken> {
        let token = self.occupants.get_mut(slot)?.take()?;
        board.write_led(slot, false);
        Some(token)
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.occupant(slot).is_some()
    }

    pub fn occupant(&self, slot: usize) -> Option<MoleToken> {
        self.occupants.get(slot).copied().flatten()
    }

    /// Slot currently holding `token`
    pub fn find(&self, token: MoleToken) -> Option<usize> {
        self.occupants.iter().position(|&occupant| occupant == Some(token))
    }

    pub fn empty_count(&self) -> usize {
        self.occupants.iter().filter(|occupant| occupant.is_none()).count()
    }

    /// Index of the `n`th empty slot, counting from slot 0.
    pub fn nth_empty(&self, n: usize) -> Option<usize> {
        self.occupants
            .iter()
            .enumerate()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(slot, _)| slot)
            .nth(n)
    }

    /// Empties every slot and drives every LED off.
    pub fn reset_all<B: MoleBoard>(&mut self, board: &mut B) {
        for (slot, occupant) in self.occupants.iter_mut().enumerate() {
            *occupant = None;
            board.write_led(slot, false);
        }
    }
}

impl<const N: usize> Default for MoleSlotTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

//! Fault taxonomy and fault bookkeeping for the game core
use crate::scheduler::QueueFull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    QueueFull = 0x1000,
    SlotOccupied = 0x3000,
    SlotOutOfRange = 0x4000,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::QueueFull => "queue full",
            ErrorCode::SlotOccupied => "slot occupied",
            ErrorCode::SlotOutOfRange => "slot out of range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// An event could not be scheduled; `kind` is the event kind code.
    QueueFull { kind: u8 },
    SlotOccupied { slot: usize },
    SlotOutOfRange { slot: usize },
}

impl CoreError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            CoreError::QueueFull { .. } => ErrorCode::QueueFull,
            CoreError::SlotOccupied { .. } => ErrorCode::SlotOccupied,
            CoreError::SlotOutOfRange { .. } => ErrorCode::SlotOutOfRange,
        }
    }

    /// Extra detail stored with the fault record
    pub const fn data(&self) -> u32 {
        match self {
            CoreError::QueueFull { kind } => *kind as u32,
            CoreError::SlotOccupied { slot } | CoreError::SlotOutOfRange { slot } => *slot as u32,
        }
    }

    /// Errors that the game algorithm should never produce
    pub const fn is_precondition_violation(&self) -> bool {
        !matches!(self, CoreError::QueueFull { .. })
    }
}

impl From<QueueFull> for CoreError {
    fn from(err: QueueFull) -> Self {
        CoreError::QueueFull {
            kind: err.0.kind().code(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub code: ErrorCode,
    pub timestamp: u32,
    pub data: u32,
}

/// Counts and remembers faults raised while the game runs.
#[derive(Debug, Default)]
pub struct Diagnostics {
    last_fault: Option<Fault>,
    fault_count: u32,
    queue_full_count: u32,
    precondition_count: u32,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Self {
            last_fault: None,
            fault_count: 0,
            queue_full_count: 0,
            precondition_count: 0,
        }
    }

    pub fn report(&mut self, error: CoreError, timestamp: u32) {
        self.last_fault = Some(Fault {
            code: error.code(),
            timestamp,
            data: error.data(),
        });
        self.fault_count = self.fault_count.saturating_add(1);

        if error.is_precondition_violation() {
            self.precondition_count = self.precondition_count.saturating_add(1);
        } else {
            self.queue_full_count = self.queue_full_count.saturating_add(1);
        }
    }

    pub fn last_fault(&self) -> Option<Fault> {
        self.last_fault
    }

    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    pub fn queue_full_count(&self) -> u32 {
        self.queue_full_count
    }

    pub fn precondition_count(&self) -> u32 {
        self.precondition_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimedEvent;

    #[test]
    fn queue_full_maps_event_kind() {
        let err = CoreError::from(QueueFull(TimedEvent::mole_pop(10)));
        assert_eq!(err, CoreError::QueueFull { kind: 1 });
        assert_eq!(err.code(), ErrorCode::QueueFull);
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn report_tracks_counts_and_last_fault() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag.last_fault(), None);

        diag.report(CoreError::QueueFull { kind: 2 }, 100);
        diag.report(CoreError::SlotOccupied { slot: 3 }, 250);

        assert_eq!(diag.fault_count(), 2);
        assert_eq!(diag.queue_full_count(), 1);
        assert_eq!(diag.precondition_count(), 1);
        assert_eq!(
            diag.last_fault(),
            Some(Fault {
                code: ErrorCode::SlotOccupied,
                timestamp: 250,
                data: 3,
            })
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ErrorCode::QueueFull as u16, 0x1000);
        assert_eq!(ErrorCode::SlotOutOfRange as u16, 0x4000);
        assert_eq!(CoreError::SlotOutOfRange { slot: 9 }.data(), 9);
    }
}

//! Error handling and fault bookkeeping

/// Failure of one of the hardware calls made by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    ButtonRead(E),
    PhaseWrite(E),
    HardwareReset(E),
}

impl<E> Error<E> {
    pub fn kind(&self) -> FaultKind {
        match self {
            Error::ButtonRead(_) => FaultKind::ButtonRead,
            Error::PhaseWrite(_) => FaultKind::PhaseWrite,
            Error::HardwareReset(_) => FaultKind::HardwareReset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    ButtonRead,
    PhaseWrite,
    HardwareReset,
    /// Frequency text did not fit; the fallback text was shown.
    DisplayFormat,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::ButtonRead => "button read failed",
            FaultKind::PhaseWrite => "phase increment write failed",
            FaultKind::HardwareReset => "CPLD reset failed",
            FaultKind::DisplayFormat => "frequency text overflow",
        }
    }
}

/// Fault counters. Nothing here stops the loop; faults are only recorded.
#[derive(Debug, Default)]
pub struct Diagnostics {
    fault_count: u16,
    last_fault: Option<FaultKind>,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Self {
            fault_count: 0,
            last_fault: None,
        }
    }

    pub fn report(&mut self, kind: FaultKind) {
        self.fault_count = self.fault_count.saturating_add(1);
        self.last_fault = Some(kind);
    }

    pub fn report_error<E>(&mut self, error: &Error<E>) {
        self.report(error.kind());
    }

    pub fn fault_count(&self) -> u16 {
        self.fault_count
    }

    pub fn last_fault(&self) -> Option<FaultKind> {
        self.last_fault
    }
}

//! Running count of selectable hostile units.

/// Result of applying one state change to the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Count dropped from positive to zero
    BecameUntargetable,
    /// Count rose from zero to positive
    BecameTargetable,
    Unchanged,
}

/// Selectable-unit counter, clamped at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectableCounter {
    count: i64,
}

impl SelectableCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            count: initial.max(0),
        }
    }

    pub fn value(&self) -> i64 {
        self.count
    }

    pub fn is_zero(&self) -> bool {
        self.count == 0
    }

    pub fn apply(&mut self, delta: i64) -> Transition {
        let prev = self.count;
        self.count = (prev + delta).max(0);

        match (prev > 0, self.count > 0) {
            (true, false) => Transition::BecameUntargetable,
            (false, true) => Transition::BecameTargetable,
            _ => Transition::Unchanged,
        }
    }
}

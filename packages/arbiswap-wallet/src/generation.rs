use std::{cell::Cell, rc::Rc};

/// Tells async wallet reads whether their result is still wanted.
///
/// Every call to [`Generation::next`] (or [`Generation::invalidate`]) makes
/// the tickets handed out before it stale, so a slow reply cannot overwrite
/// state that a newer read or event already set.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    value: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates every outstanding ticket and returns a fresh one.
    pub fn next(&self) -> Ticket {
        self.invalidate();
        Ticket { generation: self.clone(), value: self.0.get() }
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.0.get() == self.value
    }
}

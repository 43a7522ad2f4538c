//! Caller-owned expansion state.
//!
//! The view never decides on its own which headers are expanded; whoever drives it
//! keeps an [`Expansion`] and passes it in on every render.

use std::collections::HashSet;

/// The section a header is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Pseudo,
    Normal,
}

/// Position of a header within its section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderSlot {
    section: Section,
    index: usize,
}

impl HeaderSlot {
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }

    pub fn pseudo(index: usize) -> Self {
        Self::new(Section::Pseudo, index)
    }

    pub fn normal(index: usize) -> Self {
        Self::new(Section::Normal, index)
    }

    #[inline]
    pub fn section(&self) -> Section {
        self.section
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Which headers, and whether the pseudo-header section, are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    slots: HashSet<HeaderSlot>,
    all: bool,
    pseudo_headers_open: bool,
}

impl Expansion {
    /// Nothing expanded.
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// Every header and the pseudo-header section expanded.
    pub fn expand_all() -> Self {
        Self { slots: HashSet::new(), all: true, pseudo_headers_open: true }
    }

    #[must_use]
    pub fn expand(mut self, slot: HeaderSlot) -> Self {
        self.slots.insert(slot);
        self
    }

    #[must_use]
    pub fn with_pseudo_headers_open(mut self, open: bool) -> Self {
        self.pseudo_headers_open = open;
        self
    }

    /// Flips the state of `slot`, returns the new state.
    pub fn toggle(&mut self, slot: HeaderSlot) -> bool {
        if self.slots.remove(&slot) {
            false
        } else {
            self.slots.insert(slot);
            true
        }
    }

    pub fn is_expanded(&self, slot: HeaderSlot) -> bool {
        self.all || self.slots.contains(&slot)
    }

    pub fn pseudo_headers_open(&self) -> bool {
        self.pseudo_headers_open
    }
}

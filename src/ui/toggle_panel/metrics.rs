// SPDX-License-Identifier: MPL-2.0
//! Minimum size bookkeeping for toggle panels.
//!
//! A panel's minimum size is derived from its header and whichever child is
//! currently visible. The derived value is cached; every visibility change
//! must call [`LayoutCache::invalidate`] before the next read, otherwise a
//! size computed for the previous state would be returned.

use iced::Size;
use std::cell::Cell;

/// A child of the panel body together with its layout-relevant state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub visible: bool,
    pub min_size: Size,
}

impl Slot {
    pub fn new(min_size: Size) -> Self {
        Self {
            visible: true,
            min_size,
        }
    }

    /// Zero-sized placeholder.
    pub fn blank() -> Self {
        Self::new(Size::ZERO)
    }
}

/// Lazily computed layout size with explicit invalidation.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    value: Cell<Option<Size>>,
    passes: Cell<u64>,
}

impl LayoutCache {
    /// Discards the cached size.
    pub fn invalidate(&self) {
        self.value.set(None);
    }

    /// Returns the cached size, computing it with `measure` when stale.
    pub fn get_or_measure(&self, measure: impl FnOnce() -> Size) -> Size {
        if let Some(size) = self.value.get() {
            return size;
        }
        let size = measure();
        self.value.set(Some(size));
        self.passes.set(self.passes.get() + 1);
        size
    }

    /// Number of times a size was actually computed.
    pub fn passes(&self) -> u64 {
        self.passes.get()
    }
}

/// Stacks `header` above the visible `slots`.
pub fn measure_column<'a>(header: Size, slots: impl IntoIterator<Item = &'a Slot>) -> Size {
    slots
        .into_iter()
        .filter(|slot| slot.visible)
        .fold(header, |acc, slot| {
            Size::new(acc.width.max(slot.min_size.width), acc.height + slot.min_size.height)
        })
}

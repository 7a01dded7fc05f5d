//! Cargo stack — the ordered, capacity-bounded carry formation.
//!
//! Boxes attach to a carry anchor above the robot and stack vertically in
//! insertion order.  The core records *which* payloads are carried and
//! computes each slot's local offset; physically reparenting the payload
//! (disabling its simulation, parenting it under the anchor, applying the
//! offset with identity local rotation) is the scene collaborator's job,
//! driven by the returned [`CarrySlot`].

use glam::Vec3;

use wb_core::PayloadId;

use crate::{AgentError, AgentResult};

/// Default carry capacity.
pub const DEFAULT_CAPACITY: usize = 5;

/// Default vertical height of one box, metres.
pub const DEFAULT_ITEM_HEIGHT: f32 = 0.5;

// ── CargoConfig ───────────────────────────────────────────────────────────────

/// Capacity and stacking geometry for one agent's cargo.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CargoConfig {
    /// Maximum number of carried boxes.  Must be at least 1.
    pub capacity: usize,
    /// Vertical height of one box, metres.  Must be positive and finite.
    pub item_height: f32,
}

impl Default for CargoConfig {
    fn default() -> Self {
        Self {
            capacity:    DEFAULT_CAPACITY,
            item_height: DEFAULT_ITEM_HEIGHT,
        }
    }
}

// ── CarrySlot ─────────────────────────────────────────────────────────────────

/// Placement of a freshly attached payload, relative to the carry anchor.
///
/// Local orientation is always identity and there is no lateral offset —
/// boxes stack straight up.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrySlot {
    /// Zero-based stacking index (0 = directly on the anchor).
    pub index: usize,
    /// Local position under the carry anchor: `(0, item_height * index, 0)`.
    pub local_offset: Vec3,
}

// ── CargoStack ────────────────────────────────────────────────────────────────

/// The payloads one agent carries, in stacking order.
///
/// Once attached a payload is owned by the carrying agent for the rest of its
/// life in this subsystem — there is no unload operation.
///
/// # Caller precondition
///
/// Attach is not idempotent: delivering the same payload twice double-stacks
/// it.  The collision collaborator must guarantee at-most-once delivery per
/// payload; this subsystem does not defend against duplicates.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CargoStack {
    capacity:    usize,
    item_height: f32,
    items:       Vec<PayloadId>,
}

impl CargoStack {
    /// Create an empty stack.
    ///
    /// Fails with [`AgentError::ZeroCapacity`] or
    /// [`AgentError::InvalidItemHeight`] on misconfiguration.
    pub fn new(config: CargoConfig) -> AgentResult<Self> {
        if config.capacity == 0 {
            return Err(AgentError::ZeroCapacity);
        }
        if !config.item_height.is_finite() || config.item_height <= 0.0 {
            return Err(AgentError::InvalidItemHeight(config.item_height));
        }
        Ok(Self {
            capacity:    config.capacity,
            item_height: config.item_height,
            items:       Vec::new(),
        })
    }

    /// Attach `payload` on top of the stack.
    ///
    /// Returns the slot the payload occupies, or `None` — with the stack and
    /// the payload untouched — when the stack is already full.  A full stack
    /// is not an error: the caller should simply stop delivering contacts
    /// for this agent.
    pub fn try_attach(&mut self, payload: PayloadId) -> Option<CarrySlot> {
        if self.items.len() >= self.capacity {
            return None;
        }
        let index = self.items.len();
        self.items.push(payload);
        Some(CarrySlot { index, local_offset: self.slot_offset(index) })
    }

    /// Local offset of stacking slot `index`: `(0, item_height * index, 0)`.
    #[inline]
    pub fn slot_offset(&self, index: usize) -> Vec3 {
        Vec3::new(0.0, self.item_height * index as f32, 0.0)
    }

    /// Carried payloads in stacking order (bottom first).
    #[inline]
    pub fn items(&self) -> &[PayloadId] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }
}

//! Slot table tracking the active/inactive partition.
//!
//! [`SlotTable`] owns every instance a pool has produced. Each slot
//! carries a [`SlotState`] tag that names the collection the slot is in
//! and its position there, so moving a slot between collections is O(1)
//! with no containment scans. Slots are append-only: an instance keeps
//! its slot index for the table's lifetime.

/// Which collection a slot is in, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlotState {
    /// Available for reuse; `position` indexes the inactive list.
    Inactive {
        /// Index into the inactive list.
        position: u32,
    },
    /// On loan to a caller; `position` indexes the active list.
    Active {
        /// Index into the active list.
        position: u32,
    },
}

impl SlotState {
    /// Whether the slot is on loan.
    pub(crate) fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

struct Slot<T> {
    instance: T,
    state: SlotState,
}

/// Instance storage with an active/inactive partition.
///
/// The inactive list is LIFO: its tail is the head used by
/// [`activate_next`](SlotTable::activate_next), so the most recently
/// released or created instance is reused first. Removal from the
/// active list is a swap-remove; the slot moved into the hole has its
/// back-reference fixed up, which leaves active-list order unspecified.
pub(crate) struct SlotTable<T> {
    slots: Vec<Slot<T>>,
    active: Vec<u32>,
    inactive: Vec<u32>,
}

impl<T> SlotTable<T> {
    /// Create an empty table.
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `capacity` instances.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            active: Vec::new(),
            inactive: Vec::with_capacity(capacity),
        }
    }

    /// Total tracked instances.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of active slots.
    pub(crate) fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of inactive slots.
    pub(crate) fn inactive_len(&self) -> usize {
        self.inactive.len()
    }

    /// Add a new instance to the inactive set.
    ///
    /// Panics past `u32::MAX` slots.
    pub(crate) fn push_inactive(&mut self, instance: T) -> u32 {
        let slot = self.next_slot();
        let position = self.inactive.len() as u32;
        self.slots.push(Slot {
            instance,
            state: SlotState::Inactive { position },
        });
        self.inactive.push(slot);
        slot
    }

    /// Add a new instance directly to the active set.
    ///
    /// Panics past `u32::MAX` slots.
    pub(crate) fn push_active(&mut self, instance: T) -> u32 {
        let slot = self.next_slot();
        let position = self.active.len() as u32;
        self.slots.push(Slot {
            instance,
            state: SlotState::Active { position },
        });
        self.active.push(slot);
        slot
    }

    /// Move the inactive head into the active set.
    ///
    /// Returns `None` if nothing is inactive.
    pub(crate) fn activate_next(&mut self) -> Option<u32> {
        let slot = self.inactive.pop()?;
        let position = self.active.len() as u32;
        self.active.push(slot);
        self.slots[slot as usize].state = SlotState::Active { position };
        Some(slot)
    }

    /// Move an active slot to the tail of the inactive set.
    ///
    /// Returns `false` and changes nothing if `slot` is out of range or
    /// not active.
    pub(crate) fn deactivate(&mut self, slot: u32) -> bool {
        let position = match self.slots.get(slot as usize).map(|s| s.state) {
            Some(SlotState::Active { position }) => position,
            _ => return false,
        };

        let removed = self.active.swap_remove(position as usize);
        debug_assert_eq!(removed, slot, "active back-reference out of sync");
        if let Some(&moved) = self.active.get(position as usize) {
            self.slots[moved as usize].state = SlotState::Active { position };
        }

        let position = self.inactive.len() as u32;
        self.inactive.push(slot);
        self.slots[slot as usize].state = SlotState::Inactive { position };
        true
    }

    /// State of a slot, or `None` if out of range.
    pub(crate) fn state(&self, slot: u32) -> Option<SlotState> {
        self.slots.get(slot as usize).map(|s| s.state)
    }

    /// Borrow the instance in a slot.
    pub(crate) fn get(&self, slot: u32) -> Option<&T> {
        self.slots.get(slot as usize).map(|s| &s.instance)
    }

    /// Mutably borrow the instance in a slot.
    pub(crate) fn get_mut(&mut self, slot: u32) -> Option<&mut T> {
        self.slots.get_mut(slot as usize).map(|s| &mut s.instance)
    }

    /// Active slot indices, in active-list order.
    pub(crate) fn active_slots(&self) -> &[u32] {
        &self.active
    }

    /// Inactive slot indices; the last element is the next to be reused.
    pub(crate) fn inactive_slots(&self) -> &[u32] {
        &self.inactive
    }

    /// Consume the table, yielding every tracked instance in slot order.
    pub(crate) fn into_instances(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().map(|s| s.instance)
    }

    /// Instance in a slot known to exist.
    pub(crate) fn instance(&self, slot: u32) -> &T {
        &self.slots[slot as usize].instance
    }

    /// Mutable instance in a slot known to exist.
    pub(crate) fn instance_mut(&mut self, slot: u32) -> &mut T {
        &mut self.slots[slot as usize].instance
    }

    fn next_slot(&self) -> u32 {
        slot_index(self.slots.len())
    }

    /// Panic if the partition or any back-reference is inconsistent.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(
            self.active.len() + self.inactive.len(),
            self.slots.len(),
            "every slot is in exactly one collection"
        );
        for (position, &slot) in self.active.iter().enumerate() {
            assert_eq!(
                self.slots[slot as usize].state,
                SlotState::Active {
                    position: position as u32
                }
            );
        }
        for (position, &slot) in self.inactive.iter().enumerate() {
            assert_eq!(
                self.slots[slot as usize].state,
                SlotState::Inactive {
                    position: position as u32
                }
            );
        }
    }
}

/// Index for the slot appended to a table of `len` slots.
///
/// `u32::MAX` itself is never handed out.
fn slot_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(slot) if slot < u32::MAX => slot,
        _ => panic!("slot table exceeds u32::MAX instances"),
    }
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

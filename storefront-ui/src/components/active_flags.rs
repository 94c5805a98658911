// SPDX-License-Identifier: MIT OR Apache-2.0

/// Per-item "active" markers as a component renders them.
///
/// The carousel controller drives these through `ActiveMarker` messages;
/// the component only reads them back when building its classes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActiveFlags(Vec<bool>);

impl ActiveFlags {
    /// Flags for `len` items with the first one active, which is what the
    /// controller renders on init.
    pub fn first_active(len: usize) -> Self {
        Self((0..len).map(|i| i == 0).collect())
    }

    /// Returns whether anything changed, for `Component::update`.
    pub fn set(&mut self, index: usize, active: bool) -> bool {
        match self.0.get_mut(index) {
            Some(flag) if *flag != active => {
                *flag = active;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn active_class(&self, index: usize) -> Option<&'static str> {
        self.is_active(index).then_some("active")
    }
}

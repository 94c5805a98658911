/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

/// Single-open accordion: opening one section closes the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking an open section closes it; clicking a closed one opens it
    /// and closes whichever was open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

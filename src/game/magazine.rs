//! Shell magazine generation

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

use crate::core::types::Shell;

/// Fewest shells a round can be loaded with
pub const MIN_SHELLS: usize = 2;

/// Most shells a round can be loaded with
pub const MAX_SHELLS: usize = 5;

/// Ordered shells for the current round; the front fires next
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Magazine {
    shells: VecDeque<Shell>,
}

impl Magazine {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a magazine with an explicit firing order
    pub fn from_shells(shells: impl IntoIterator<Item = Shell>) -> Self {
        Self {
            shells: shells.into_iter().collect(),
        }
    }

    /// Load a fresh, shuffled magazine
    ///
    /// Size is uniform over `MIN_SHELLS..=MAX_SHELLS` and live shells are
    /// the rounded-up majority.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(MIN_SHELLS..=MAX_SHELLS);
        let live = live_count_for(count);

        let mut shells: Vec<Shell> = (0..count)
            .map(|i| if i < live { Shell::live() } else { Shell::blank() })
            .collect();
        shells.shuffle(rng);

        Self::from_shells(shells)
    }

    pub fn len(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.shells.iter().filter(|s| s.is_live).count()
    }

    pub fn blank_count(&self) -> usize {
        self.len() - self.live_count()
    }

    pub fn peek(&self) -> Option<&Shell> {
        self.shells.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shell> {
        self.shells.iter()
    }

    pub(crate) fn pop_front(&mut self) -> Option<Shell> {
        self.shells.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.shells.clear();
    }
}

/// Live shells for a magazine of `count`: half, rounded up
pub fn live_count_for(count: usize) -> usize {
    count.div_ceil(2)
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LearningStreak {
    count: u32,
}

impl LearningStreak {
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Records one "keep my streak going" action and returns the new count.
    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

use rand::{seq::SliceRandom, Rng};

use crate::constants::content::MOTIVATION_MESSAGES;

pub struct MotivationService;

impl MotivationService {
    pub fn boost() -> &'static str {
        Self::boost_with(&mut rand::thread_rng())
    }

    pub fn boost_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        MOTIVATION_MESSAGES
            .choose(rng)
            .copied()
            .unwrap_or(MOTIVATION_MESSAGES[0])
    }
}

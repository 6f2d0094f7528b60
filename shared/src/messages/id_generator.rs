use log::warn;

use crate::messages::message_id::MessageId;

/// Produces collision-resistant MessageIds from a timestamp plus randomness
pub struct IdGenerator {
    rng: fastrand::Rng,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic generator, for reproducible tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn generate(&mut self, issued_millis: u64) -> MessageId {
        MessageId::from_parts(issued_millis, self.rng.u64(..))
    }

    /// Generates an id that `is_live` reports as unused, re-rolling the random
    /// half on collision
    pub fn generate_unique(
        &mut self,
        issued_millis: u64,
        is_live: impl Fn(&MessageId) -> bool,
    ) -> MessageId {
        loop {
            let id = self.generate(issued_millis);
            if !is_live(&id) {
                return id;
            }
            warn!("MessageId {} collides with a live message, regenerating", id);
        }
    }
}

//! Trait implementations for SessionContext.

use super::SessionContext;
use crate::shared::snapshot::GameplaySnapshot;
use crate::state::traits::{Snapshot, Update};

// SessionContext implements Snapshot by creating a GameplaySnapshot.
impl Snapshot for SessionContext {
    type Output = GameplaySnapshot;

    fn create_snapshot(&self) -> Self::Output {
        self.get_snapshot()
    }
}

// Frame ticks drive note movement, miss sweeping and the timers.
impl Update for SessionContext {
    fn update(&mut self, dt: f64) {
        SessionContext::update(self, dt);
    }
}

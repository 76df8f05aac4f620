//! Traits for state management.
//!
//! These traits define the interface the logic thread drives a session through.

/// Trait for creating render-ready snapshots.
///
/// Snapshots are immutable captures of state sent to the render side.
/// They decouple game logic from rendering.
pub trait Snapshot {
    /// The snapshot type produced.
    type Output;

    /// Creates an immutable snapshot for rendering.
    fn create_snapshot(&self) -> Self::Output;
}

/// Trait for per-frame updates.
pub trait Update {
    /// Updates the state for one frame.
    ///
    /// # Arguments
    /// * `dt` - Delta time in seconds since last update.
    fn update(&mut self, dt: f64);
}

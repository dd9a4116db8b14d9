//! Random number source port.
//!
//! The generator never reaches for a global RNG; callers hand it a source so
//! draws can be seeded or scripted in tests.

/// Uniform integer source.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// Draw an integer uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32;
}

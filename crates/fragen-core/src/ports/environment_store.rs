//! Environment store port.
//!
//! This is the mutable key-value map a pre-request hook writes into and
//! request templates read from. Implementations are in-memory; persistence is
//! handled separately by [`EnvironmentRepository`](super::EnvironmentRepository).

use crate::domain::EnvValue;

/// Mutable key-value store scoped to one environment.
///
/// # Design Rules
///
/// - Writes never fail
/// - `set` on an existing key replaces its value
/// - `get` only sees enabled entries
pub trait EnvironmentStore: Send {
    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: EnvValue);

    /// Look up the value for `key`.
    fn get(&self, key: &str) -> Option<EnvValue>;

    /// Remove `key`. Returns `true` if it was present.
    fn unset(&mut self, key: &str) -> bool;
}

//! Empirical time-of-day patterns.
//!
//! The two domains project the baseline differently: grid intensity is
//! scaled directly by a diurnal factor, while traffic blends the baseline
//! with a target multiplier according to how far ahead the slot is.

pub mod grid;
pub mod traffic;

//! Vibecast library exports for testing

pub mod core;
pub mod player;
pub mod playlist;
pub mod tui;

#[cfg(test)]
pub mod test_support;

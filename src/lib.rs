pub mod core;
pub mod display;
pub mod game;
pub mod player;

#[cfg(test)]
mod engine_tests;

pub mod eval;
pub mod machine;
pub mod random;

pub use machine::MachinePlayer;
pub use random::RandomPlayer;

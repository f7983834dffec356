mod basis;
pub mod errors;
mod gates;
mod measurements;
mod rng;
mod state;
pub mod utils;

pub use basis::Basis;
pub use gates::Gate;
pub use measurements::Measurement;
pub use rng::RandomSource;
pub use state::QuantumState;

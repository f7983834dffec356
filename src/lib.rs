pub mod config;
mod core;
pub mod protocols;
mod sampler;

pub use crate::config::{Backend, Bb84Config, RawConfig};
pub use crate::core::{Basis, Gate, Measurement, QuantumState, RandomSource, errors, utils};
pub use crate::protocols::qkd::bb84::{Bb84Result, ProtocolRunner, TrialSummary};
pub use crate::protocols::qkd::channel::{
    ChannelSimulator, DensityMatrixDetector, Detector, IdealDetector,
};
pub use crate::protocols::qkd::eavesdropper::InterceptResend;
pub use crate::protocols::qkd::encoder::{QubitState, encode, encode_message};
pub use crate::protocols::qkd::sifting::sift;
pub use crate::sampler::{Sampler, extract_sample};

//! Quantum Key Distribution (QKD) Protocols.
//!
//! The BB84 exchange is split into its stages:
//! - **encoder**: prepares one of the four BB84 states per bit.
//! - **channel**: measures the states in Bob's bases.
//! - **eavesdropper**: optional intercept-resend attacker on the channel.
//! - **sifting**: keeps the positions where the bases agree.
//! - **bb84**: runs the stages in order and reports the outcome.

pub mod bb84;
pub mod channel;
pub mod eavesdropper;
pub mod encoder;
pub mod sifting;

//! BB84 Quantum Key Distribution Protocol.
//!
//! Alice encodes random bits in random bases, Bob measures in his own random
//! bases, both keep the positions where the bases agree, and a random sample of
//! the sifted key is revealed to check for disturbance on the channel.

use crate::config::{Backend, Bb84Config};
use crate::core::utils::{format_bases, format_bits};
use crate::core::{Basis, RandomSource};
use crate::errors::{ConfigError, ProtocolError};
use crate::protocols::qkd::channel::{ChannelSimulator, DensityMatrixDetector, Detector, IdealDetector};
use crate::protocols::qkd::eavesdropper::InterceptResend;
use crate::protocols::qkd::encoder::encode_message;
use crate::protocols::qkd::sifting::sift;
use crate::sampler::Sampler;
use std::fmt;
use tracing::{debug, info, warn};

/// BB84 results
#[derive(Debug, Clone, PartialEq)]
pub struct Bb84Result {
    /// Number of qubits sent.
    pub raw_length: usize,
    /// Length of the sifted key before sampling.
    pub sifted_length: usize,
    pub alice_bits: Vec<bool>,
    pub alice_bases: Vec<Basis>,
    pub bob_bases: Vec<Basis>,
    pub bob_results: Vec<bool>,
    /// Alice's key straight after sifting.
    pub alice_sifted: Vec<bool>,
    /// Bob's key straight after sifting.
    pub bob_sifted: Vec<bool>,
    /// Indices drawn for the public comparison, in draw order.
    pub sample_indices: Vec<usize>,
    pub alice_sample: Vec<bool>,
    pub bob_sample: Vec<bool>,
    /// Whether the revealed samples agree. `false` signals disturbance.
    pub samples_match: bool,
    /// Positions where the samples disagree.
    pub sample_errors: usize,
    /// Quantum bit error rate estimated on the sample, in percent.
    pub qber: f64,
    /// Number of qubits the eavesdropper intercepted.
    pub eve_intercepted_count: usize,
    /// Alice's final shared key (sifted key minus the sample).
    pub alice_key: Vec<bool>,
    /// Bob's final shared key (sifted key minus the sample).
    pub bob_key: Vec<bool>,
}

impl Bb84Result {
    pub fn keys_match(&self) -> bool {
        self.alice_key == self.bob_key
    }

    pub fn key_length(&self) -> usize {
        self.alice_key.len()
    }
}

impl fmt::Display for Bb84Result {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alice's bits: {}", format_bits(&self.alice_bits))?;
        writeln!(f, "Alice's bases: {}", format_bases(&self.alice_bases))?;
        writeln!(f, "Bob's bases: {}", format_bases(&self.bob_bases))?;
        writeln!(f, "Bob's measurement results: {}", format_bits(&self.bob_results))?;
        if self.eve_intercepted_count > 0 {
            writeln!(f, "Qubits intercepted: {}", self.eve_intercepted_count)?;
        }
        writeln!(f, "Alice's sifted key: {}", format_bits(&self.alice_sifted))?;
        writeln!(f, "Bob's sifted key: {}", format_bits(&self.bob_sifted))?;
        writeln!(f, "Alice's sample: {}", format_bits(&self.alice_sample))?;
        writeln!(f, "Bob's sample: {}", format_bits(&self.bob_sample))?;
        writeln!(f, "bob_sample =?= alice_sample: {}", self.samples_match)?;
        writeln!(f, "Sample QBER: {:.2}%", self.qber)?;
        writeln!(f, "Alice's key: {}", format_bits(&self.alice_key))?;
        writeln!(f, "Bob's key: {}", format_bits(&self.bob_key))?;
        write!(f, "Key length = {}", self.key_length())
    }
}

/// Drives one BB84 exchange with a chosen measurement model.
#[derive(Debug, Clone)]
pub struct ProtocolRunner<D: Detector> {
    config: Bb84Config,
    channel: ChannelSimulator<D>,
}

impl<D: Detector> ProtocolRunner<D> {
    pub fn new(config: Bb84Config, detector: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            channel: ChannelSimulator::new(detector),
        })
    }

    /// Runs the protocol once with the configured seed.
    pub fn run(&self) -> Result<Bb84Result, ProtocolError> {
        self.run_with_seed(self.config.seed)
    }

    /// Runs the protocol once, seeding a fresh `RandomSource` with `seed`.
    pub fn run_with_seed(&self, seed: u64) -> Result<Bb84Result, ProtocolError> {
        let n = self.config.bits_len;
        let mut rng = RandomSource::from_seed(seed);

        // Alice prepares qubits
        let alice_bits = rng.generate_bits(n);
        let alice_bases = rng.generate_bases(n);
        let message = encode_message(&alice_bits, &alice_bases);

        let bob_bases = rng.generate_bases(n);

        // Eavesdropper intercepts
        let (message, eve_intercepted_count) = if self.config.eve_ratio > 0.0 {
            InterceptResend::new(self.config.eve_ratio)?.intercept(
                message,
                self.channel.detector(),
                &mut rng,
            )?
        } else {
            (message, 0)
        };

        // Bob measures
        let bob_results = self.channel.measure(message, &bob_bases, &mut rng)?;
        debug!(seed, qubits = n, eve_intercepted_count, "qubits measured");

        // Sifting stage
        let alice_sifted = sift(&alice_bases, &bob_bases, &alice_bits);
        let bob_sifted = sift(&alice_bases, &bob_bases, &bob_results);
        let sifted_length = alice_sifted.len();
        debug!(sifted_length, "keys sifted");

        // Sampling stage
        let sample_indices = rng.select_sample_indices(self.config.sample_size, sifted_length)?;
        let sampler = Sampler::new(sample_indices.clone());

        let mut alice_key = alice_sifted.clone();
        let mut bob_key = bob_sifted.clone();
        let alice_sample = sampler.run(&mut alice_key)?;
        let bob_sample = sampler.run(&mut bob_key)?;

        let sample_errors = alice_sample
            .iter()
            .zip(&bob_sample)
            .filter(|(a, b)| a != b)
            .count();
        let qber = if alice_sample.is_empty() {
            0.0
        } else {
            (sample_errors as f64 / alice_sample.len() as f64) * 100.0
        };
        let samples_match = alice_sample == bob_sample;

        if samples_match {
            info!(key_length = alice_key.len(), "samples agree");
        } else {
            warn!(sample_errors, qber, "samples disagree, channel may be eavesdropped");
        }

        Ok(Bb84Result {
            raw_length: n,
            sifted_length,
            alice_bits,
            alice_bases,
            bob_bases,
            bob_results,
            alice_sifted,
            bob_sifted,
            sample_indices,
            alice_sample,
            bob_sample,
            samples_match,
            sample_errors,
            qber,
            eve_intercepted_count,
            alice_key,
            bob_key,
        })
    }

    /// Runs `trials` exchanges on consecutive seeds starting at the configured one.
    pub fn run_trials(&self, trials: usize) -> Result<TrialSummary, ProtocolError> {
        if trials == 0 {
            return Err(ConfigError::NoTrials.into());
        }

        let mut mismatched_runs = 0;
        let mut qber_sum = 0.0;
        for i in 0..trials as u64 {
            let result = self.run_with_seed(self.config.seed.wrapping_add(i))?;
            if !result.samples_match {
                mismatched_runs += 1;
            }
            qber_sum += result.qber;
        }

        Ok(TrialSummary {
            trials,
            mismatched_runs,
            mean_qber: qber_sum / trials as f64,
        })
    }
}

/// Aggregate of several runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
    pub trials: usize,
    /// Runs whose samples disagreed.
    pub mismatched_runs: usize,
    /// Mean sample QBER across runs, in percent.
    pub mean_qber: f64,
}

impl TrialSummary {
    /// Fraction of runs flagged by the sample comparison.
    pub fn detection_rate(&self) -> f64 {
        self.mismatched_runs as f64 / self.trials as f64
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trials: {}, mismatched samples: {} ({:.1}%), mean sample QBER: {:.2}%",
            self.trials,
            self.mismatched_runs,
            self.detection_rate() * 100.0,
            self.mean_qber
        )
    }
}

/// Runs BB84 once with the backend named in `config`.
pub fn run(config: &Bb84Config) -> Result<Bb84Result, ProtocolError> {
    match config.backend {
        Backend::Ideal => ProtocolRunner::new(*config, IdealDetector)?.run(),
        Backend::DensityMatrix => ProtocolRunner::new(*config, DensityMatrixDetector)?.run(),
    }
}

/// Runs `trials` BB84 exchanges with the backend named in `config`.
pub fn run_trials(config: &Bb84Config, trials: usize) -> Result<TrialSummary, ProtocolError> {
    match config.backend {
        Backend::Ideal => ProtocolRunner::new(*config, IdealDetector)?.run_trials(trials),
        Backend::DensityMatrix => {
            ProtocolRunner::new(*config, DensityMatrixDetector)?.run_trials(trials)
        }
    }
}

//! Intercept-resend attacker placed between Alice and Bob.

use crate::config::validate_ratio;
use crate::core::errors::{ConfigError, StateError};
use crate::core::{Basis, RandomSource};
use crate::protocols::qkd::channel::Detector;
use crate::protocols::qkd::encoder::{QubitState, encode};

/// Eve measures a fraction of the qubits in a random basis and resends what she saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptResend {
    /// Probability that any given qubit is intercepted, in `[0, 1]`.
    ratio: f64,
}

impl InterceptResend {
    /// Fails with `ConfigError::InvalidEveRatio` unless `ratio` lies in `[0, 1]`.
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        validate_ratio(ratio)?;
        Ok(Self { ratio })
    }

    /// Passes the message through Eve.
    ///
    /// Returns the (possibly re-prepared) states and the number intercepted.
    pub fn intercept<D: Detector>(
        &self,
        message: Vec<QubitState>,
        detector: &D,
        rng: &mut RandomSource,
    ) -> Result<(Vec<QubitState>, usize), StateError> {
        let mut intercepted = 0;
        let mut forwarded = Vec::with_capacity(message.len());

        for state in message {
            if rng.chance(self.ratio) {
                intercepted += 1;
                let basis = Basis::from_bit(rng.coin());
                let seen = detector.detect(state, basis, rng)?;
                forwarded.push(encode(seen, basis));
            } else {
                forwarded.push(state);
            }
        }

        Ok((forwarded, intercepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::qkd::channel::IdealDetector;

    #[test]
    fn zero_ratio_forwards_untouched() {
        let mut rng = RandomSource::from_seed(5);
        let message = vec![encode(true, Basis::Diagonal), encode(false, Basis::Rectilinear)];
        let (out, n) = InterceptResend::new(0.0)
            .unwrap()
            .intercept(message, &IdealDetector, &mut rng)
            .unwrap();
        assert_eq!(n, 0);
        assert_eq!(out, vec![QubitState::Minus, QubitState::Zero]);
    }

    #[test]
    fn full_ratio_intercepts_everything() {
        let mut rng = RandomSource::from_seed(5);
        let message: Vec<_> = (0..64).map(|i| encode(i % 3 == 0, Basis::Diagonal)).collect();
        let (out, n) = InterceptResend::new(1.0)
            .unwrap()
            .intercept(message, &IdealDetector, &mut rng)
            .unwrap();
        assert_eq!(n, 64);
        assert_eq!(out.len(), 64);
        // Eve picks the rectilinear basis about half the time.
        assert!(out.iter().any(|q| q.basis() == Basis::Rectilinear));
    }

    #[test]
    fn ratio_outside_unit_interval_is_rejected() {
        for bad in [1.5, -0.1, f64::NAN] {
            assert!(matches!(
                InterceptResend::new(bad),
                Err(ConfigError::InvalidEveRatio(_))
            ));
        }
        assert!(InterceptResend::new(0.0).is_ok());
        assert!(InterceptResend::new(1.0).is_ok());
    }
}

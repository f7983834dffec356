use crate::errors::ProtocolError;

/// Publicly revealed portion of a key.
///
/// Sampling is destructive: every index is resolved against the key as it
/// currently stands, the bit at that position is removed, and the next index
/// sees the shorter key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sampler {
    /// Indices to reveal, processed in this exact order.
    pub indices: Vec<usize>,
}

impl Sampler {
    /// Creates a new `Sampler` over the given index sequence.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Removes the sampled bits from `key` and returns them in draw order.
    ///
    /// For each index `i`, the bit at `i % key.len()` is popped. Duplicate
    /// indices and index sequences longer than the key are allowed; they simply
    /// keep wrapping around the shrinking key.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InsufficientKey` when an index has to be resolved
    /// against an empty key. `key` is left untouched in that case.
    pub fn run(&self, key: &mut Vec<bool>) -> Result<Vec<bool>, ProtocolError> {
        if self.indices.len() > key.len() {
            return Err(ProtocolError::InsufficientKey {
                remaining: key.len(),
                requested: self.indices.len(),
            });
        }

        let mut sample = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            let position = index % key.len();
            sample.push(key.remove(position));
        }
        Ok(sample)
    }
}

/// Splits `key` into `(remaining_key, sample)` using the shrink-as-you-go rule.
pub fn extract_sample(
    mut key: Vec<bool>,
    indices: &[usize],
) -> Result<(Vec<bool>, Vec<bool>), ProtocolError> {
    let sample = Sampler::new(indices.to_vec()).run(&mut key)?;
    Ok((key, sample))
}

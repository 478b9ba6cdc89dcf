//! Label encoder: assigns a unique integer code to every observed label.
//!
//! Code 0 is reserved for unknown values. Labels must match exactly
//! between preparation and inference; no case folding or other
//! normalization of the values is performed here.

use std::hash::Hash;
use std::marker::PhantomData;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::codebook::{Codebook, UNKNOWN_CODE};
use crate::config::EncoderConfig;
use crate::encoders::encoder_trait::{Encoder, EncoderBuilder};
use crate::error::EncoderError;

/// Unprepared label encoder. Holds only configuration; `prepare` consumes
/// it and yields the read-only [`LabelEncoder`].
#[derive(Debug, Clone)]
pub struct LabelEncoderBuilder<L> {
    config: EncoderConfig,
    _label: PhantomData<L>,
}

impl<L> LabelEncoderBuilder<L> {
    pub fn new(config: EncoderConfig) -> Self {
        LabelEncoderBuilder {
            config,
            _label: PhantomData,
        }
    }
}

impl<L> Default for LabelEncoderBuilder<L> {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

/// Prepared label encoder.
///
/// Maps each label observed during preparation to a code in 1..=N, in
/// first-appearance order. Unseen labels and missing values encode to
/// code 0. With `normalize` enabled, codes are scaled by 1/N into [0, 1]
/// on encode and scaled back before decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder<L>
where
    L: Eq + Hash,
{
    codebook: Codebook<L>,
    n_labels: usize,
    config: EncoderConfig,
}

impl<L> EncoderBuilder for LabelEncoderBuilder<L>
where
    L: Eq + Hash + Clone,
{
    type Label = L;
    type Encoder = LabelEncoder<L>;

    fn prepare(self, priming_data: &[Option<L>]) -> Result<LabelEncoder<L>, EncoderError> {
        let mut codebook = Codebook::new();
        for value in priming_data.iter().flatten() {
            codebook.observe(value.clone());
        }
        if codebook.is_empty() {
            return Err(EncoderError::NoObservedLabels);
        }

        let n_labels = codebook.len();
        log::debug!(
            "prepared label encoder: {} distinct labels from {} rows",
            n_labels,
            priming_data.len()
        );

        Ok(LabelEncoder {
            codebook,
            n_labels,
            config: self.config,
        })
    }
}

impl<L> LabelEncoder<L>
where
    L: Eq + Hash + Clone,
{
    /// Number of distinct labels observed during preparation.
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// Whether encoded codes are scaled into [0, 1].
    pub fn normalize(&self) -> bool {
        self.config.normalize
    }

    /// Integer code for a single value; 0 for unseen labels.
    pub fn code_for(&self, label: &L) -> u32 {
        self.codebook.code_for(label)
    }

    /// Reduce one encoded value to an integer code.
    ///
    /// Truncates toward zero, matching the inverse of the division used in
    /// `encode`. For large N the normalize round-trip can shift a code by
    /// floating-point rounding before truncation; that loss is accepted.
    fn code_of_encoded(&self, value: f32) -> Option<u32> {
        let raw = if self.config.normalize {
            value * self.n_labels as f32
        } else {
            value
        };
        // NaN casts to 0, which has no inverse entry.
        let code = raw as i64;
        u32::try_from(code).ok()
    }
}

impl<L> Encoder for LabelEncoder<L>
where
    L: Eq + Hash + Clone,
{
    type Label = L;

    fn encode(&self, data: &[Option<L>]) -> Array1<f32> {
        let mut encoded = Vec::with_capacity(data.len());
        for value in data {
            let code = match value {
                Some(v) => self.codebook.code_for(v),
                None => UNKNOWN_CODE,
            };
            let mut x = code as f32;
            if self.config.normalize {
                x /= self.n_labels as f32;
            }
            encoded.push(x);
        }
        Array1::from_vec(encoded)
    }

    fn decode(&self, encoded_values: &Array1<f32>) -> Vec<Option<L>> {
        encoded_values
            .iter()
            .map(|&v| {
                self.code_of_encoded(v)
                    .and_then(|code| self.codebook.label_for(code))
                    .cloned()
            })
            .collect()
    }

    fn is_target(&self) -> bool {
        self.config.is_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prime(values: &[Option<&'static str>], config: EncoderConfig) -> LabelEncoder<&'static str> {
        LabelEncoderBuilder::new(config).prepare(values).unwrap()
    }

    #[test]
    fn codes_follow_first_appearance_order() {
        let enc = prime(
            &[Some("cat"), Some("dog"), Some("cat"), Some("bird")],
            EncoderConfig::default(),
        );

        assert_eq!(enc.n_labels(), 3);
        assert_eq!(enc.code_for(&"cat"), 1);
        assert_eq!(enc.code_for(&"dog"), 2);
        assert_eq!(enc.code_for(&"bird"), 3);
    }

    #[test]
    fn nulls_are_skipped_during_prepare() {
        let enc = prime(
            &[None, Some("x"), None, Some("y")],
            EncoderConfig::default(),
        );

        assert_eq!(enc.n_labels(), 2);
        assert_eq!(enc.code_for(&"x"), 1);
        assert_eq!(enc.code_for(&"y"), 2);
    }

    #[test]
    fn prepare_fails_without_any_label() {
        let all_null: Vec<Option<&str>> = vec![None, None];
        let err = LabelEncoderBuilder::new(EncoderConfig::default())
            .prepare(&all_null)
            .unwrap_err();
        assert_eq!(err, EncoderError::NoObservedLabels);

        let empty: Vec<Option<&str>> = vec![];
        assert!(LabelEncoderBuilder::new(EncoderConfig::default())
            .prepare(&empty)
            .is_err());
    }

    #[test]
    fn unknown_and_null_encode_to_zero() {
        let config = EncoderConfig {
            normalize: false,
            ..Default::default()
        };
        let enc = prime(&[Some("cat"), Some("dog")], config);

        let out = enc.encode(&[Some("cat"), Some("fish"), None]);
        assert_eq!(out.to_vec(), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn decode_truncates_toward_zero() {
        let config = EncoderConfig {
            normalize: false,
            ..Default::default()
        };
        let enc = prime(&[Some("a"), Some("b")], config);

        // 1.9 truncates to code 1, not 2; -0.5 truncates to 0.
        let decoded = enc.decode(&Array1::from_vec(vec![1.9, -0.5]));
        assert_eq!(decoded, vec![Some("a"), None]);
    }

    #[test]
    fn decode_tolerates_garbage_values() {
        let config = EncoderConfig {
            normalize: false,
            ..Default::default()
        };
        let enc = prime(&[Some("a"), Some("b")], config);

        let decoded = enc.decode(&Array1::from_vec(vec![99.0, -3.0, f32::NAN, f32::INFINITY]));
        assert_eq!(decoded, vec![None, None, None, None]);
    }
}

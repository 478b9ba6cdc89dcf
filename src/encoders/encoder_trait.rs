use ndarray::Array1;

use crate::error::EncoderError;

/// A small trait abstraction for the encoders in this crate. Sibling
/// encoders share the prepare/encode/decode contract, split across two
/// traits so that the prepared state is a distinct type: `prepare`
/// consumes the builder, which makes use-before-prepare a compile error
/// instead of a silent runtime gap.
pub trait EncoderBuilder {
    type Label;
    type Encoder: Encoder<Label = Self::Label>;

    /// Learn the mapping from the priming data. `None` entries are
    /// missing values and contribute no mapping state.
    fn prepare(self, priming_data: &[Option<Self::Label>]) -> Result<Self::Encoder, EncoderError>;
}

/// A prepared encoder: read-only mapping between raw column values and
/// numeric features.
pub trait Encoder {
    type Label;

    /// Encode one numeric value per input element, order preserved.
    /// Values the encoder has never seen (including `None`) encode to the
    /// unknown sentinel; this never fails.
    fn encode(&self, data: &[Option<Self::Label>]) -> Array1<f32>;

    /// Map encoded values back to the original labels, best effort.
    /// Unresolvable values decode to `None` rather than erroring.
    fn decode(&self, encoded_values: &Array1<f32>) -> Vec<Option<Self::Label>>;

    /// Per-element width of the encoded output.
    fn output_size(&self) -> usize {
        1
    }

    /// Whether this encoder encodes a prediction target.
    fn is_target(&self) -> bool;
}

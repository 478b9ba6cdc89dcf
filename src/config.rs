use serde::{Deserialize, Serialize};

/// Construction-time options shared by the encoders in this crate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Marks an encoder used for a prediction target. Bookkeeping for the
    /// surrounding pipeline; has no effect on the encoding itself.
    pub is_target: bool,

    /// Scale encoded codes into [0, 1] by dividing by the label count.
    pub normalize: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            is_target: false,
            normalize: true,
        }
    }
}

impl EncoderConfig {
    /// Default options except `is_target`, which is set explicitly.
    pub fn for_target() -> Self {
        EncoderConfig {
            is_target: true,
            ..Default::default()
        }
    }
}

pub mod encoder_trait;
pub mod label;

pub use encoder_trait::{Encoder, EncoderBuilder};
pub use label::{LabelEncoder, LabelEncoderBuilder};

pub mod config;
pub mod crypto_serde;
pub mod data_structures;
pub mod dlog;
pub mod engine;
pub mod error;
pub mod keys;
pub mod many_level;
pub mod two_level;

pub use config::{DLOG_BOUND, LEVEL_BUDGET, MASK_DLOG_BOUND, PLAINTEXT_BITS, PLAINTEXT_MODULUS};
pub use data_structures::*;
pub use dlog::{discrete_log, discrete_log_default, discrete_log_signed, DlogTable};
pub use engine::{params, LheEngine, PairingParams, G1_GENERATOR_LABEL, G2_GENERATOR_LABEL};
pub use error::LheError;
pub use keys::{keygen, keygen_g1, keygen_g2, PublicKey, SecretKey};

//! Configurable codec facade over the free functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{decode, decode_strict, encode, trim_padding, Base64Error};

/// How [`Codec::decode`] treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Never fails; invalid characters yield unspecified bytes.
    #[default]
    Permissive,
    /// Rejects characters outside the alphabet and misplaced padding.
    Strict,
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Permissive => write!(f, "permissive"),
            DecodeMode::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for DecodeMode {
    type Err = Base64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(DecodeMode::Permissive),
            "strict" => Ok(DecodeMode::Strict),
            _ => Err(Base64Error::UnknownDecodeMode(s.to_string())),
        }
    }
}

/// Codec settings. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub decode_mode: DecodeMode,
    /// Drop trailing `=` from encoded output.
    pub trim_padding: bool,
}

/// Standard base64 codec.
///
/// # Example
///
/// ```
/// use base64_codec::{Codec, CodecConfig, DecodeMode};
///
/// let codec = Codec::new(CodecConfig {
///     decode_mode: DecodeMode::Strict,
///     trim_padding: true,
/// });
/// let encoded = codec.encode(b"M");
/// assert_eq!(encoded, "TQ");
/// assert_eq!(codec.decode(&encoded).unwrap(), b"M");
/// assert!(codec.decode("T!==").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// A codec that decodes in [`DecodeMode::Strict`] and keeps padding.
    pub fn strict() -> Self {
        Self::new(CodecConfig {
            decode_mode: DecodeMode::Strict,
            ..CodecConfig::default()
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut encoded = encode(input);
        if self.config.trim_padding {
            let len = trim_padding(&encoded).len();
            encoded.truncate(len);
        }
        encoded
    }

    /// Decodes according to the configured mode.
    ///
    /// # Errors
    ///
    /// Only in [`DecodeMode::Strict`], see [`decode_strict`].
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Base64Error> {
        match self.config.decode_mode {
            DecodeMode::Permissive => Ok(decode(input)),
            DecodeMode::Strict => decode_strict(input),
        }
    }
}

impl From<CodecConfig> for Codec {
    fn from(config: CodecConfig) -> Self {
        Self::new(config)
    }
}

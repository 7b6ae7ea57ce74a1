//! Error type shared by every decode and derive operation in the crate.

use crate::encoding::{
    base58::Base58Error,
    bech32::Bech32Err
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed or wrong-length input for the requested decode.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A Base58Check or Bech32 checksum did not match its payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Input is well formed but uses a variant this crate does not encode,
    /// e.g. a witness program that is not 20 bytes.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The vanity search worker pool could not be started.
    #[error("worker pool: {0}")]
    WorkerPool(String),
}

impl Error {
    pub(crate) fn format<S: Into<String>>(msg: S) -> Self {
        Error::InvalidFormat(msg.into())
    }
}

impl From<Base58Error> for Error {
    fn from(e: Base58Error) -> Self {
        match e {
            Base58Error::BadChecksum => Error::ChecksumMismatch,
            Base58Error::BadChar(c) => Error::InvalidFormat(format!("invalid base58 character '{}'", c)),
            Base58Error::CharAfterSpace(i) => Error::InvalidFormat(format!("unexpected character after whitespace at {}", i)),
            Base58Error::TooShort(n) => Error::InvalidFormat(format!("base58check payload too short ({} bytes)", n)),
        }
    }
}

impl From<Bech32Err> for Error {
    fn from(e: Bech32Err) -> Self {
        match e {
            Bech32Err::BadChecksum => Error::ChecksumMismatch,
            Bech32Err::InvalidLength(n) => Error::UnsupportedEncoding(format!("witness program of {} bytes", n)),
            Bech32Err::InvalidVersion(v) => Error::UnsupportedEncoding(format!("witness version {}", v)),
            Bech32Err::InvalidChar(c) => Error::InvalidFormat(format!("invalid bech32 character '{}'", c)),
            Bech32Err::MixedCase => Error::format("bech32 string mixes upper and lower case"),
            Bech32Err::MissingSeparator => Error::format("bech32 string has no separator"),
            Bech32Err::InvalidData => Error::format("malformed bech32 data"),
            Bech32Err::UnknownPrefix(hrp) => Error::InvalidFormat(format!("unknown human readable part '{}'", hrp)),
        }
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        Error::InvalidFormat(e.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::WorkerPool(e.to_string())
    }
}

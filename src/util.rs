use std::convert::TryInto;
use std::str::FromStr;

use crate::{
    encoding::version_prefix::VersionPrefix,
    Error, Result
};

/*
    Decodes hex strings into a byte vector.
    Upper and lower case digits are both accepted.
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(Error::InvalidFormat(format!("odd hex length {}", hex.len())));
    }

    hex.as_bytes()
        .chunks(2)
        .map(|pair| -> Result<u8> { Ok((hex_value(pair[0])? << 4) | hex_value(pair[1])?) })
        .collect()
}

/*
    Encodes byte slices into a lowercase hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    bytes.iter().map(|x| {
        format!("{:02x}", x)
    }).collect::<String>()
}

/**
    Returns true if the byte is a hex digit in either case.
*/
pub fn is_hex_char(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_value(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidFormat(format!("invalid hex character '{}'", c as char)))
    }
}

/**
    Converts a slice into an array, failing if the length is not exactly N.
*/
pub fn try_into<T: Copy, const N: usize>(v: &[T]) -> Result<[T; N]> {
    v.try_into()
        .map_err(|_| Error::InvalidFormat(format!("expected {} bytes, found {}", N, v.len())))
}

/**
    Network context threaded through every encoder that emits a
    network specific prefix (WIF, P2PKH, P2WPKH).
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    Bitcoin,
    Testnet
}

impl Network {
    pub fn address_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::BTCAddress,
            Network::Testnet => VersionPrefix::BTCTestNetAddress
        }
    }

    pub fn wif_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::PrivateKeyWIF,
            Network::Testnet => VersionPrefix::TestNetPrivateKeyWIF
        }
    }

    /// Human readable part used by bech32 addresses.
    pub fn hrp(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bc",
            Network::Testnet => "tb"
        }
    }

    /// Inverse of `wif_prefix`. WIF version bytes are the only network discriminator
    /// for private keys.
    pub fn from_wif_prefix(byte: u8) -> Option<Self> {
        match VersionPrefix::from_int(byte as u32) {
            Ok(VersionPrefix::PrivateKeyWIF) => Some(Network::Bitcoin),
            Ok(VersionPrefix::TestNetPrivateKeyWIF) => Some(Network::Testnet),
            _ => None
        }
    }

    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "bc" => Some(Network::Bitcoin),
            "tb" => Some(Network::Testnet),
            _ => None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::Testnet => "testnet"
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcoin
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bitcoin" | "mainnet" | "main" => Ok(Network::Bitcoin),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(Error::InvalidFormat(format!("unknown network '{}'", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode_accepts_both_cases() {
        assert_eq!(decode_02x("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(encode_02x(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(decode_02x("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_decode_rejects_bad_input() {
        assert!(matches!(decode_02x("abc"), Err(Error::InvalidFormat(_))));
        assert!(matches!(decode_02x("zz"), Err(Error::InvalidFormat(_))));
        assert!(matches!(decode_02x("0g"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn array_conversion_checks_length() {
        let a: [u8; 2] = try_into(&[1u8, 2]).unwrap();
        assert_eq!(a, [1, 2]);
        assert!(try_into::<u8, 3>(&[1u8, 2]).is_err());
    }

    #[test]
    fn parse_network() {
        assert_eq!("bitcoin".parse::<Network>().unwrap(), Network::Bitcoin);
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Bitcoin);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);
        assert!("regtest".parse::<Network>().is_err());
        assert_eq!(Network::default(), Network::Bitcoin);
    }

    #[test]
    fn wif_prefix_round_trip() {
        for network in [Network::Bitcoin, Network::Testnet].iter() {
            let byte = network.wif_prefix().to_bytes()[0];
            assert_eq!(Network::from_wif_prefix(byte), Some(*network));
        }
        assert_eq!(Network::from_wif_prefix(0x00), None);
    }
}

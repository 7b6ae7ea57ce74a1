/*
    Module implements bech32 encoding (BIP-173) for version 0
    pay to witness public key hash addresses.

    Segwit addresses are built through bitcoin_bech32's WitnessProgram,
    generic strings and 5 bit regrouping go through the bech32 crate.
    Only the bech32 checksum variant is accepted, never bech32m.
*/
use crate::util::Network;

use ::bech32::{u5, Variant};
use bitcoin_bech32::WitnessProgram;
use bitcoin_bech32::constants::Network as Bech32Network;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bech32Err {
    InvalidChar(char),
    MixedCase,
    MissingSeparator,
    BadChecksum,
    InvalidData,
    InvalidLength(usize),
    InvalidVersion(u8),
    UnknownPrefix(String)
}

impl From<::bech32::Error> for Bech32Err {
    fn from(e: ::bech32::Error) -> Self {
        match e {
            ::bech32::Error::MissingSeparator => Bech32Err::MissingSeparator,
            ::bech32::Error::InvalidChecksum => Bech32Err::BadChecksum,
            ::bech32::Error::InvalidChar(c) => Bech32Err::InvalidChar(c),
            ::bech32::Error::MixedCase => Bech32Err::MixedCase,
            _ => Bech32Err::InvalidData
        }
    }
}

impl From<bitcoin_bech32::Error> for Bech32Err {
    fn from(e: bitcoin_bech32::Error) -> Self {
        match e {
            bitcoin_bech32::Error::Bech32(e) => e.into(),
            _ => Bech32Err::InvalidData
        }
    }
}

// Encoding character set, used to validate user supplied fragments
const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const MAX_LENGTH: usize = 90;

// Only version 0 pubkey hash programs are encoded
const WITNESS_VERSION: u8 = 0;
const P2WPKH_PROGRAM_LENGTH: usize = 20;

/**
    Returns the 5 bit value of a bech32 character. Case insensitive.
*/
pub fn char_value(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    CHARSET.chars().position(|x| x == c).map(|i| i as u8)
}

/**
    Regroups a slice of `from` bit integers into `to` bit integers.
    With padding the trailing bits are zero filled into a final group,
    without padding leftover bits must be zero and fewer than `from`.
*/
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Bech32Err> {
    Ok(::bech32::convert_bits(data, from, to, pad)?)
}

/**
    Encodes 5 bit data under the given human readable part and appends the checksum.
*/
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Err> {
    let data = data.iter()
        .map(|v| u5::try_from_u8(*v))
        .collect::<Result<Vec<u5>, _>>()?;

    Ok(::bech32::encode(hrp, data, Variant::Bech32)?)
}

/**
    Splits a bech32 string into its lowercase human readable part and its 5 bit data,
    with the checksum verified and removed.
*/
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Bech32Err> {
    if s.len() > MAX_LENGTH {
        return Err(Bech32Err::InvalidLength(s.len()));
    }

    let (hrp, data, variant) = ::bech32::decode(s)?;
    if variant != Variant::Bech32 {
        return Err(Bech32Err::BadChecksum);
    }

    Ok((hrp.to_lowercase(), data.iter().map(|v| v.to_u8()).collect()))
}

/**
    Returns true if the string is a well formed bech32 string with a valid checksum.
*/
pub fn verify(s: &str) -> bool {
    decode(s).is_ok()
}

fn witness_network(network: Network) -> Bech32Network {
    match network {
        Network::Bitcoin => Bech32Network::Bitcoin,
        Network::Testnet => Bech32Network::Testnet
    }
}

/**
    Encodes a 20 byte public key hash as a version 0 segwit address.
*/
pub fn encode_to_address(program: &[u8], network: Network) -> Result<String, Bech32Err> {
    if program.len() != P2WPKH_PROGRAM_LENGTH {
        return Err(Bech32Err::InvalidLength(program.len()));
    }

    let witness_program = WitnessProgram::new(
        u5::try_from_u8(WITNESS_VERSION)?,
        program.to_vec(),
        witness_network(network)
    )?;

    Ok(witness_program.to_address())
}

/**
    Decodes a version 0 segwit address into its network and 20 byte witness program.
*/
pub fn decode_address(address: &str) -> Result<(Network, Vec<u8>), Bech32Err> {
    let (hrp, data) = decode(address)?;
    let network = Network::from_hrp(&hrp).ok_or_else(|| Bech32Err::UnknownPrefix(hrp.clone()))?;

    let (version, program) = data.split_first().ok_or(Bech32Err::InvalidData)?;
    if *version != WITNESS_VERSION {
        return Err(Bech32Err::InvalidVersion(*version));
    }
    let program = convert_bits(program, 5, 8, false)?;
    if program.len() != P2WPKH_PROGRAM_LENGTH {
        return Err(Bech32Err::InvalidLength(program.len()));
    }

    Ok((network, program))
}

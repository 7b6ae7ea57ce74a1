use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    entropy,
    guess::{self, KeyFormat},
    hash,
    encoding::{
        base58::Base58,
        decimal
    },
    util::{
        decode_02x,
        encode_02x,
        try_into,
        Network
    },
    Error, Result
};
use rand::{CryptoRng, RngCore};
use secp256k1::Signing;

pub const PRIVKEY_LENGTH: usize = 32;
pub const PUBKEY_COMPRESSED_LENGTH: usize = 33;
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

const COMPRESSED_FLAG: u8 = 0x01;
const UNCOMPRESSED_FLAG: u8 = 0x00;

/**
    Behaviour shared by private and public keys.
*/
pub trait Key {
    /**
        Serialized bytes of the key, including the compression marker
        for private keys.
    */
    fn to_raw(&self) -> Vec<u8>;

    /**
        Lowercase hex of `to_raw()`.
    */
    fn to_hex(&self) -> String {
        encode_02x(&self.to_raw())
    }

    fn is_compressed(&self) -> bool;
}

/**
    A 32 byte secp256k1 scalar together with the compression flag that
    decides how its public key is serialized.

    Constructors accept any 32 bytes, including zero. Use `is_zero()`
    before deriving anything from a key of unknown origin.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivKey {
    data: [u8; PRIVKEY_LENGTH],
    compressed: bool
}

impl PrivKey {
    /**
        Generates a new compressed key from the operating system's entropy source.
    */
    pub fn new() -> Self {
        Self::from_rng(&mut entropy::osrng())
    }

    /**
        Generates a new compressed key from the given random source.
        Scalars outside the curve order are redrawn.
    */
    pub fn from_rng<R>(rng: &mut R) -> Self
    where R: RngCore + CryptoRng
    {
        Self {
            data: entropy::random_scalar(rng),
            compressed: true
        }
    }

    /**
        Wraps a 32 byte scalar with the given compression flag.
    */
    pub fn from_bytes(data: [u8; PRIVKEY_LENGTH], compressed: bool) -> Self {
        Self { data, compressed }
    }

    /**
        64 hex characters, or 66 where the last byte is `01` for a compressed key.
    */
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = decode_02x(hex)?;
        match bytes.len() {
            PRIVKEY_LENGTH => Ok(Self::from_bytes(try_into(&bytes)?, false)),
            33 if bytes[PRIVKEY_LENGTH] == COMPRESSED_FLAG => Ok(Self::from_bytes(try_into(&bytes[..PRIVKEY_LENGTH])?, true)),
            33 => Err(Error::InvalidFormat(format!("unexpected compression marker {:02x}", bytes[PRIVKEY_LENGTH]))),
            n => Err(Error::InvalidFormat(format!("hex key must be 64 or 66 characters, found {}", n * 2)))
        }
    }

    /**
        Decodes a wallet import format string.
        The network encoded in the prefix byte is discarded, see `decode_wif()`.
    */
    pub fn from_wif(wif: &str) -> Result<Self> {
        Self::decode_wif(wif).map(|(key, _)| key)
    }

    /**
        Decodes a wallet import format string into the key and the network
        its prefix byte names.
        * 33 byte payload: prefix + scalar (uncompressed)
        * 34 byte payload: prefix + scalar + 0x01 (compressed)
    */
    pub fn decode_wif(wif: &str) -> Result<(Self, Network)> {
        let payload = Base58::check_decode(wif)?;

        let compressed = match payload.len() {
            33 => false,
            34 if payload[33] == COMPRESSED_FLAG => true,
            34 => return Err(Error::InvalidFormat(format!("unexpected WIF compression flag {:02x}", payload[33]))),
            n => return Err(Error::InvalidFormat(format!("WIF payload must be 33 or 34 bytes, found {}", n)))
        };

        let network = Network::from_wif_prefix(payload[0])
            .ok_or_else(|| Error::InvalidFormat(format!("unknown WIF prefix {:02x}", payload[0])))?;

        Ok((Self::from_bytes(try_into(&payload[1..1 + PRIVKEY_LENGTH])?, compressed), network))
    }

    /**
        Exactly 32 bytes (uncompressed) or 33 bytes where the last byte is
        the compression flag: 0x01 compressed, 0x00 uncompressed.
    */
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let compressed = match raw.len() {
            PRIVKEY_LENGTH => false,
            33 => match raw[PRIVKEY_LENGTH] {
                COMPRESSED_FLAG => true,
                UNCOMPRESSED_FLAG => false,
                x => return Err(Error::InvalidFormat(format!("unexpected compression flag {:02x}", x)))
            },
            n => return Err(Error::InvalidFormat(format!("raw key must be 32 or 33 bytes, found {}", n)))
        };

        Ok(Self::from_bytes(try_into(&raw[..PRIVKEY_LENGTH])?, compressed))
    }

    /**
        Unsigned base 10 integer, left padded to 32 bytes. Compressed.
    */
    pub fn from_decimal(dec: &str) -> Result<Self> {
        Ok(Self::from_bytes(decimal::decode::<PRIVKEY_LENGTH>(dec)?, true))
    }

    /**
        Sha256 of the UTF-8 bytes of the string ("brainwallet"). Compressed.
    */
    pub fn from_string(s: &str) -> Self {
        Self::from_blob(s.as_bytes())
    }

    /**
        Sha256 of arbitrary binary data. Compressed.
    */
    pub fn from_blob(data: &[u8]) -> Self {
        Self::from_bytes(hash::sha256(data), true)
    }

    /**
        Classifies the input as decimal, hex, WIF, string or raw (in that order)
        and decodes it with the first format that matches.
    */
    pub fn from_guess(input: &[u8]) -> Result<Self> {
        guess::guess(input).map(|g| g.key)
    }

    /**
        Replaces the scalar with its sha256 hash.
    */
    pub fn rehash(&mut self) {
        self.data = hash::sha256(self.data);
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    pub fn compress(&mut self) {
        self.compressed = true;
    }

    pub fn uncompress(&mut self) {
        self.compressed = false;
    }

    /**
        The 32 byte scalar without any compression marker.
    */
    pub fn as_bytes(&self) -> [u8; PRIVKEY_LENGTH] {
        self.data
    }

    /*
        Export the private key in wallet import format (Base58Check encoded with prefix).
        The compression flag byte is appended for compressed keys.
    */
    pub fn to_wif(&self, network: Network) -> String {
        Base58::new(Some(network.wif_prefix()), &self.to_raw()).check_encode()
    }

    pub fn to_decimal(&self) -> String {
        decimal::encode(&self.data)
    }
}

impl Key for PrivKey {
    fn to_raw(&self) -> Vec<u8> {
        let mut raw = self.data.to_vec();
        if self.compressed {
            raw.push(COMPRESSED_FLAG);
        }
        raw
    }

    fn is_compressed(&self) -> bool {
        self.compressed
    }
}

/**
    A point on secp256k1 and the serialization (33 or 65 bytes) it was derived or parsed with.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubKey {
    key: PublicKey,
    compressed: bool
}

impl PubKey {
    /**
        Static point G on the secp256k1 curve multiplied k times, where k is the private key.
        Serialized compressed or uncompressed per the private key's flag at the time of
        derivation. Zero and scalars at or above the curve order are rejected.
    */
    pub fn derive(k: &PrivKey) -> Result<Self> {
        Self::derive_with(&Secp256k1::signing_only(), k)
    }

    /**
        Same as `derive()` but reuses an existing context. Context creation is
        far more expensive than a single multiplication.
    */
    pub fn derive_with<C: Signing>(secp: &Secp256k1<C>, k: &PrivKey) -> Result<Self> {
        let secret = SecretKey::from_slice(&k.data)
            .map_err(|_| Error::format("private key scalar is zero or not below the curve order"))?;

        Ok(Self {
            key: PublicKey::from_secret_key(secp, &secret),
            compressed: k.compressed
        })
    }

    /**
        A serialized point: 33 bytes with prefix 0x02/0x03 or 65 bytes with prefix 0x04.
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let compressed = match (bytes.len(), bytes.first().copied()) {
            (PUBKEY_COMPRESSED_LENGTH, Some(0x02)) | (PUBKEY_COMPRESSED_LENGTH, Some(0x03)) => true,
            (PUBKEY_UNCOMPRESSED_LENGTH, Some(0x04)) => false,
            (n, _) => return Err(Error::InvalidFormat(format!("not a serialized public key ({} bytes)", n)))
        };

        Ok(Self {
            key: PublicKey::from_slice(bytes)?,
            compressed
        })
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&decode_02x(hex)?)
    }

    /**
        Input that decodes as a decimal, hex or WIF private key is always treated
        as a private key and the public key derived from it. Otherwise a serialized
        public key in hex is accepted as is, and anything else falls back to the
        remaining private key formats (string, raw).
    */
    pub fn from_guess(input: &[u8]) -> Result<Self> {
        let guessed = guess::guess(input);
        if let Ok(g) = &guessed {
            match g.format {
                KeyFormat::Decimal | KeyFormat::Hex | KeyFormat::Wif => return Self::derive(&g.key),
                KeyFormat::String | KeyFormat::Raw => {}
            }
        }

        let trimmed = match input.last() {
            Some(b'\n') => &input[..input.len() - 1],
            _ => input
        };
        if let Ok(hex) = std::str::from_utf8(trimmed) {
            if let Ok(key) = Self::from_hex(hex) {
                return Ok(key);
            }
        }

        Self::derive(&guessed?.key)
    }

    /**
        Ripemd160( Sha256( serialized public key ) )
    */
    pub fn hash160(&self) -> [u8; 20] {
        hash::hash160(self.to_raw())
    }
}

impl Key for PubKey {
    fn to_raw(&self) -> Vec<u8> {
        if self.compressed {
            self.key.serialize().to_vec()
        } else {
            self.key.serialize_uncompressed().to_vec()
        }
    }

    fn is_compressed(&self) -> bool {
        self.compressed
    }
}

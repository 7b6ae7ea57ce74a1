use crate::{
    encoding::{
        version_prefix::VersionPrefix
    },
    hash
};

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 256] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
];


#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    BadChar(char),
    CharAfterSpace(usize),
    TooShort(usize),
    BadChecksum
}

/// Returns true if the byte is part of the base58 alphabet.
pub fn is_base58_char(c: u8) -> bool {
    MAP_BASE58[c as usize] != -1
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        //Concatenate: prefix | payload | checksum
        let mut bytes: Vec<u8> = self.bytes();
        let checksum = hash::checksum(&bytes);
        bytes.extend_from_slice(&checksum);

        Self::encode(Self { prefix: None, payload: bytes })
    }

    /// Encode data in base58 format.
    pub fn encode(self) -> String {
        let data = self.bytes();

        //Leading zero bytes map one to one onto leading '1's
        let zcount = data.iter().take_while(|b| **b == 0).count();

        //Little endian base58 digits of the remaining big endian number.
        //Each input byte updates every digit: digit = (digit*256 + carry)%58, carry = (digit*256 + carry)/58
        let mut result: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
        for d in &data[zcount..] {
            let mut carry = *d as usize;
            for digit in result.iter_mut() {
                let new_digit = *digit as usize * 256 + carry;
                *digit = (new_digit % 58) as u8;
                carry = new_digit / 58;
            }

            while carry > 0 {
                result.push((carry % 58) as u8);
                carry /= 58;
            }
        }

        result.extend(std::iter::repeat(0).take(zcount));
        result.iter().rev().map(|x| BASE58_ALPHABET[*x as usize] as char).collect()
    }

    fn bytes(self) -> Vec<u8> {
        match self.prefix {
            Some(x) => {
                let mut d = x.to_bytes();
                d.extend_from_slice(&self.payload);
                d
            },
            None => self.payload
        }
    }


    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    ///
    /// Leading and trailing whitespace is skipped, as in the Bitcoin Core implementation.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        let source = encoded.as_bytes();

        //Skip leading spaces
        let mut i = source.iter().take_while(|c| c.is_ascii_whitespace()).count();

        //Skip and count leading '1's
        let zeroes = source[i..].iter().take_while(|c| **c == b'1').count();
        i += zeroes;

        //Allocate enough space in big-endian base256 representation.
        let size = (source.len() - i) * 733 / 1000 + 1; // log(58) / log(256), rounded up.
        let mut b256: Vec<u8> = vec![0; size];

        //Process the characters
        while i < source.len() && !source[i].is_ascii_whitespace() {
            let ch = MAP_BASE58[source[i] as usize];
            if ch == -1 {
                return Err(Base58Error::BadChar(encoded[i..].chars().next().unwrap_or('?')));
            }

            let mut carry = ch as u32;
            for byte in b256.iter_mut().rev() {
                carry += 58 * (*byte as u32);
                *byte = (carry % 256) as u8;
                carry /= 256;
            }
            i += 1;
        }

        //Skip trailing spaces
        i += source[i..].iter().take_while(|c| c.is_ascii_whitespace()).count();
        if i != source.len() {
            return Err(Base58Error::CharAfterSpace(i));
        }

        //Skip leading zeroes in b256 and prepend the counted zero bytes
        let j = b256.iter().take_while(|b| **b == 0).count();
        let mut result: Vec<u8> = vec![0; zeroes];
        result.extend_from_slice(&b256[j..]);

        Ok(result)
    }

    /// Checks if a base58 check encoded string is valid
    pub fn validate_checksum(encoded: &str) -> Result<bool, Base58Error> {
        let bytes = Base58::decode(encoded)?;
        if bytes.len() < 4 { return Err(Base58Error::TooShort(bytes.len())) }

        //Check derived_checksum == extracted_checksum
        Ok(hash::checksum(&bytes[..bytes.len()-4])[..] == bytes[bytes.len()-4..])
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed as it is variable length depending on context.
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        let mut bytes = Base58::decode(encoded)?;
        if bytes.len() < 4 { return Err(Base58Error::TooShort(bytes.len())) }

        let payload_len = bytes.len() - 4;
        if hash::checksum(&bytes[..payload_len])[..] != bytes[payload_len..] {
            return Err(Base58Error::BadChecksum);
        }

        bytes.truncate(payload_len);
        Ok(bytes)
    }
}

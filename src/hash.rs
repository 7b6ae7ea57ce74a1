/*
    Hash module includes the hash functions necessary to hash
    a public key into an address and to checksum encoded payloads.
*/

use crate::{
    Ripemd160, Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it.
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(input.as_ref()));
    out
}

/*
    Double sha256. Used for Base58Check and message checksums.
*/
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    Takes in a byte array and returns the ripemd160 hash of it.
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(input.as_ref()));
    out
}

/**
    Ripemd160( Sha256( input ) )
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/**
    First four bytes of the double sha256 of the input.
*/
pub fn checksum<T>(input: T) -> [u8; 4]
where T: AsRef<[u8]>
{
    let h = sha256d(input);
    [h[0], h[1], h[2], h[3]]
}

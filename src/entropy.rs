use rand::{CryptoRng, RngCore};

use crate::{
    OsRng,
    SecretKey
};

/**
    Draws 32 random bytes from the given source until they form a valid
    secp256k1 scalar (non-zero and below the curve order).
*/
pub fn random_scalar<R>(rng: &mut R) -> [u8; 32]
where R: RngCore + CryptoRng
{
    let mut bytes = [0u8; 32];
    loop {
        rng.fill_bytes(&mut bytes);
        if SecretKey::from_slice(&bytes).is_ok() {
            return bytes;
        }
    }
}

/**
    Returns new entropy source
*/
pub fn osrng() -> OsRng {
    OsRng
}

/*
    Library that converts Bitcoin private keys between their textual and
    binary representations, derives public keys from them and encodes
    the resulting P2PKH and P2WPKH addresses.

    Supported private key formats:
        - raw bytes (32, or 33 with a compression flag)
        - hex (64 or 66 characters)
        - wallet import format (WIF)
        - decimal
        - SHA256 of a string or binary blob ("brainwallet")
        - a guess between all of the above

    The network (mainnet/testnet) is never global state. It is passed
    into every encoder that needs it.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
        - BIP-173 (https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki)
        - learn me a bitcoin (https://learnmeabitcoin.com/)
*/

//Outward facing modules
pub mod key;
pub mod address;
pub mod guess;
pub mod rehash;
pub mod vanity;
pub mod encoding;
pub mod error;
pub mod prelude;

//Modules for internal use
pub mod hash;
pub mod util;
mod entropy;
mod impls;

pub use error::{Error, Result};

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Sha256, Digest};
use ripemd160::Ripemd160;

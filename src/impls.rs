/**
    This module combines all the boilerplate
    implementations of fmt::Display and more.
*/

use crate::{
    key::{self, Key},
    address,
    guess,
    util::Network,
    vanity
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for key::PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/*
    address module impls
*/
impl fmt::Display for address::Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let encoded = self.encode().map_err(|_| fmt::Error)?;
        write!(f, "{}", encoded)
    }
}

impl fmt::Display for address::AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*
    guess module impls
*/
impl fmt::Display for guess::KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*
    util module impls
*/
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*
    vanity module impls
*/
impl fmt::Display for vanity::Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let secs = self.estimated_remaining.as_secs();
        write!(
            f,
            "{} attempts, about {}h {:02}m {:02}s left",
            self.attempts, secs / 3600, (secs / 60) % 60, secs % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        address::{Address, AddressType},
        guess::KeyFormat,
        key::{PrivKey, PubKey},
        util::Network,
        vanity::Progress
    };
    use std::time::Duration;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn keys_display_as_hex() {
        let mut k = PrivKey::from_hex(ONE).unwrap();
        assert_eq!(k.to_string(), ONE);
        k.compress();
        assert_eq!(k.to_string(), format!("{}01", ONE));
        assert_eq!(
            PubKey::derive(&k).unwrap().to_string(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn addresses_display_encoded() {
        let mut k = PrivKey::from_hex(ONE).unwrap();
        k.compress();
        let pk = PubKey::derive(&k).unwrap();
        assert_eq!(Address::P2PKH(pk, Network::Bitcoin).to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(
            Address::P2WPKH(pk, Network::Bitcoin).to_string(),
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        );
    }

    #[test]
    fn names() {
        assert_eq!(AddressType::P2WPKH.to_string(), "p2wpkh");
        assert_eq!(KeyFormat::Wif.to_string(), "wif");
        assert_eq!(Network::Testnet.to_string(), Network::Testnet.as_str());
        assert_eq!(
            Progress { attempts: 20_000, estimated_remaining: Duration::from_secs(3725) }.to_string(),
            "20000 attempts, about 1h 02m 05s left"
        );
    }
}

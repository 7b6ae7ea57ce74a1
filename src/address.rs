use crate::{
    key::{PrivKey, PubKey},
    encoding::{
        base58::Base58,
        bech32
    },
    util::Network,
    Result
};

/**
    Address scheme for a public key hash.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    P2PKH,
    P2WPKH
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "p2pkh",
            AddressType::P2WPKH => "p2wpkh"
        }
    }
}

/**
    An address is never stored, it is the encoding of a public key under
    a scheme and a network. Both schemes share the hash160 payload.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    P2PKH(PubKey, Network),
    P2WPKH(PubKey, Network)
}

impl Address {
    pub fn new(pk: PubKey, r#type: AddressType, network: Network) -> Self {
        match r#type {
            AddressType::P2PKH => Address::P2PKH(pk, network),
            AddressType::P2WPKH => Address::P2WPKH(pk, network)
        }
    }

    /**
        Encodes the address.
        * P2PKH: Base58Check( version | Ripemd160( Sha256( Public Key ) ) )
        * P2WPKH: Bech32( hrp, 0, Ripemd160( Sha256( Public Key ) ) )
    */
    pub fn encode(&self) -> Result<String> {
        match self {
            Address::P2PKH(pk, network) => Ok(p2pkh(pk, *network)),
            Address::P2WPKH(pk, network) => p2wpkh(pk, *network)
        }
    }

    /**
        Encodes a 20 byte public key hash directly, without a public key.
    */
    pub fn from_hash160(hash: &[u8; 20], r#type: AddressType, network: Network) -> Result<String> {
        match r#type {
            AddressType::P2PKH => Ok(Base58::new(Some(network.address_prefix()), hash).check_encode()),
            AddressType::P2WPKH => Ok(bech32::encode_to_address(hash, network)?)
        }
    }

    /**
        Verifies that an address is valid by checking the payload and checksum.
        Accepts mainnet and testnet P2PKH and P2WPKH addresses.
    */
    pub fn is_valid(address: &str) -> bool {
        if bech32::decode_address(address).is_ok() {
            return true;
        }

        match Base58::check_decode(address) {
            Ok(decoded) => {
                decoded.len() == 21
                    && (decoded[0] == Network::Bitcoin.address_prefix().to_bytes()[0]
                        || decoded[0] == Network::Testnet.address_prefix().to_bytes()[0])
            },
            Err(_) => false
        }
    }
}

/**
    Legacy pay to public key hash address. Version byte 0x00 on mainnet, 0x6F on testnet.
*/
pub fn p2pkh(pk: &PubKey, network: Network) -> String {
    Base58::new(Some(network.address_prefix()), &pk.hash160()).check_encode()
}

/**
    Version 0 pay to witness public key hash address, "bc" on mainnet and "tb" on testnet.
*/
pub fn p2wpkh(pk: &PubKey, network: Network) -> Result<String> {
    Ok(bech32::encode_to_address(&pk.hash160(), network)?)
}

/**
    Address of the key in a WIF string. The network comes from the WIF prefix.
*/
pub fn from_wif(wif: &str, r#type: AddressType) -> Result<String> {
    let (k, network) = PrivKey::decode_wif(wif)?;
    Address::new(PubKey::derive(&k)?, r#type, network).encode()
}

/**
    Address of the brainwallet key for a string.
*/
pub fn from_str(s: &str, r#type: AddressType, network: Network) -> Result<String> {
    let k = PrivKey::from_string(s);
    Address::new(PubKey::derive(&k)?, r#type, network).encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        key::Key,
        util::decode_02x,
        Error
    };

    const G_COMPRESSED: &str = "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

    fn generator() -> PubKey {
        PubKey::from_hex(G_COMPRESSED).unwrap()
    }

    #[test]
    fn p2pkh_known_vectors() {
        let pk = generator();
        let address = p2pkh(&pk, Network::Bitcoin);
        assert_eq!(address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert!(Address::is_valid(&address));

        let testnet = p2pkh(&pk, Network::Testnet);
        assert_eq!(testnet, "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
        assert!(testnet.starts_with('m') || testnet.starts_with('n'));
        assert!(Address::is_valid(&testnet));
    }

    #[test]
    fn uncompressed_key_has_its_own_address() {
        let k = PrivKey::from_hex("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        let pk = PubKey::derive(&k).unwrap();
        assert!(!pk.is_compressed());
        assert_eq!(p2pkh(&pk, Network::Bitcoin), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }

    #[test]
    fn p2wpkh_known_vectors() {
        let pk = generator();
        assert_eq!(p2wpkh(&pk, Network::Bitcoin).unwrap(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert_eq!(
            Address::P2WPKH(pk, Network::Testnet).encode().unwrap(),
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx"
        );
        assert!(Address::is_valid("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"));
        assert!(!Address::is_valid("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5"));
    }

    #[test]
    fn random_keys_have_network_prefixes() {
        for _ in 0..5 {
            let pk = PubKey::derive(&PrivKey::new()).unwrap();
            assert!(Address::P2PKH(pk, Network::Bitcoin).encode().unwrap().starts_with('1'));
            assert!(Address::P2WPKH(pk, Network::Bitcoin).encode().unwrap().starts_with("bc1q"));
            assert!(Address::P2WPKH(pk, Network::Testnet).encode().unwrap().starts_with("tb1q"));
        }
    }

    #[test]
    fn hash160_addresses() {
        let hash = [0u8; 20];
        assert_eq!(
            Address::from_hash160(&hash, AddressType::P2PKH, Network::Bitcoin).unwrap(),
            "1111111111111111111114oLvT2"
        );
        let segwit = Address::from_hash160(&hash, AddressType::P2WPKH, Network::Bitcoin).unwrap();
        assert!(segwit.starts_with("bc1q"));
        assert!(bech32::verify(&segwit));
    }

    #[test]
    fn wif_and_string_shortcuts() {
        assert_eq!(
            from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn", AddressType::P2PKH).unwrap(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
        let k = PrivKey::from_string("satoshi");
        let expected = p2pkh(&PubKey::derive(&k).unwrap(), Network::Testnet);
        assert_eq!(from_str("satoshi", AddressType::P2PKH, Network::Testnet).unwrap(), expected);
    }

    #[test]
    fn invalid_addresses() {
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ"));
        // A valid Base58Check string that is a WIF, not an address
        assert!(!Address::is_valid("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"));
        assert_eq!(
            PubKey::from_slice(&decode_02x("05").unwrap()),
            Err(Error::InvalidFormat("not a serialized public key (1 bytes)".to_string()))
        );
    }
}

/*
    Format guessing for private key input of unknown encoding.

    The rules are evaluated in a fixed order and the first rule whose
    predicate matches decides the format. A later rule is never tried
    once an earlier one matched, even if the later one would also fit.

        1. Decimal  - digits only
        2. Hex      - exactly 64 or 66 hex digits
        3. WIF      - 51 or 52 base58 characters forming a valid WIF
        4. String   - 7 bit ASCII without NUL, hashed with sha256
        5. Raw      - exactly 32 bytes, or 33 with a 0x00/0x01 flag byte

    A single trailing newline is ignored by the text rules but not by
    the raw rule, which sees the input exactly as given.
*/

use crate::{
    encoding::base58::is_base58_char,
    key::{PrivKey, PRIVKEY_LENGTH},
    util::{is_hex_char, Network},
    Error, Result
};

const WIF_LENGTH_MIN: usize = 51;
const WIF_LENGTH_MAX: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    Decimal,
    Hex,
    Wif,
    String,
    Raw
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Decimal => "decimal",
            KeyFormat::Hex => "hex",
            KeyFormat::Wif => "wif",
            KeyFormat::String => "string",
            KeyFormat::Raw => "raw"
        }
    }
}

/**
    Result of a successful guess. `network` is only known for WIF input.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub key: PrivKey,
    pub format: KeyFormat,
    pub network: Option<Network>
}

struct Input<'a> {
    //Exactly as given
    data: &'a [u8],
    //Without a single trailing newline
    text: &'a [u8]
}

impl<'a> Input<'a> {
    fn new(data: &'a [u8]) -> Self {
        let text = match data.last() {
            Some(b'\n') => &data[..data.len() - 1],
            _ => data
        };
        Self { data, text }
    }

    fn as_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.text).map_err(|_| Error::format("input is not valid UTF-8"))
    }
}

struct Rule {
    format: KeyFormat,
    matches: fn(&Input) -> bool,
    decode: fn(&Input) -> Result<Guess>
}

const RULES: [Rule; 5] = [
    Rule { format: KeyFormat::Decimal, matches: is_decimal, decode: decode_decimal },
    Rule { format: KeyFormat::Hex, matches: is_hex, decode: decode_hex },
    Rule { format: KeyFormat::Wif, matches: is_wif, decode: decode_wif },
    Rule { format: KeyFormat::String, matches: is_string, decode: decode_string },
    Rule { format: KeyFormat::Raw, matches: is_raw, decode: decode_raw },
];

/**
    Returns the format of the first rule that matches the input, if any.
*/
pub fn classify(input: &[u8]) -> Option<KeyFormat> {
    let input = Input::new(input);
    RULES.iter().find(|rule| (rule.matches)(&input)).map(|rule| rule.format)
}

/**
    Decodes the input with the first matching rule. Errors from that rule's
    decoder are returned as is, no later rule is attempted.
*/
pub fn guess(input: &[u8]) -> Result<Guess> {
    let input = Input::new(input);
    let rule = RULES.iter()
        .find(|rule| (rule.matches)(&input))
        .ok_or_else(|| Error::format("input does not match any private key format"))?;

    tracing::debug!(format = rule.format.as_str(), len = input.data.len(), "classified private key input");
    (rule.decode)(&input)
}

fn is_decimal(input: &Input) -> bool {
    !input.text.is_empty() && input.text.iter().all(|c| c.is_ascii_digit())
}

fn is_hex(input: &Input) -> bool {
    let len = input.text.len();
    (len == PRIVKEY_LENGTH * 2 || len == (PRIVKEY_LENGTH + 1) * 2) && input.text.iter().all(|c| is_hex_char(*c))
}

fn is_wif(input: &Input) -> bool {
    let len = input.text.len();
    (WIF_LENGTH_MIN..=WIF_LENGTH_MAX).contains(&len)
        && input.text.iter().all(|c| is_base58_char(*c))
        && input.as_str().map(|s| PrivKey::decode_wif(s).is_ok()).unwrap_or(false)
}

fn is_string(input: &Input) -> bool {
    !input.text.is_empty() && input.text.iter().all(|c| *c > 0 && *c < 128)
}

fn is_raw(input: &Input) -> bool {
    match input.data.len() {
        PRIVKEY_LENGTH => true,
        33 => input.data[PRIVKEY_LENGTH] <= 0x01,
        _ => false
    }
}

fn decode_decimal(input: &Input) -> Result<Guess> {
    Ok(Guess { key: PrivKey::from_decimal(input.as_str()?)?, format: KeyFormat::Decimal, network: None })
}

fn decode_hex(input: &Input) -> Result<Guess> {
    Ok(Guess { key: PrivKey::from_hex(input.as_str()?)?, format: KeyFormat::Hex, network: None })
}

fn decode_wif(input: &Input) -> Result<Guess> {
    let (key, network) = PrivKey::decode_wif(input.as_str()?)?;
    Ok(Guess { key, format: KeyFormat::Wif, network: Some(network) })
}

fn decode_string(input: &Input) -> Result<Guess> {
    Ok(Guess { key: PrivKey::from_string(input.as_str()?), format: KeyFormat::String, network: None })
}

fn decode_raw(input: &Input) -> Result<Guess> {
    Ok(Guess { key: PrivKey::from_raw(input.data)?, format: KeyFormat::Raw, network: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    const HEX_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const WIF_KEY: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";

    #[test]
    fn decimal_wins_over_everything() {
        assert_eq!(classify(b"12345"), Some(KeyFormat::Decimal));
        // 64 decimal digits are also valid hex, decimal comes first
        let digits = "1".repeat(64);
        assert_eq!(classify(digits.as_bytes()), Some(KeyFormat::Decimal));
        assert_eq!(guess(b"1\n").unwrap().key.to_decimal(), "1");
    }

    #[test]
    fn hex_before_wif_and_string() {
        let g = guess(HEX_KEY.as_bytes()).unwrap();
        assert_eq!(g.format, KeyFormat::Hex);
        assert_eq!(g.key.to_hex(), HEX_KEY);
        assert!(!g.key.is_compressed());

        let upper = format!("{}01\n", HEX_KEY.to_uppercase());
        let g = guess(upper.as_bytes()).unwrap();
        assert_eq!(g.format, KeyFormat::Hex);
        assert!(g.key.is_compressed());
    }

    #[test]
    fn committed_rule_reports_its_own_error() {
        // 66 hex digits with a bad marker: hex matched, so no fallback to string
        let bad = format!("{}02", HEX_KEY);
        assert_eq!(classify(bad.as_bytes()), Some(KeyFormat::Hex));
        assert!(matches!(guess(bad.as_bytes()), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn wif_carries_network() {
        let g = guess(WIF_KEY.as_bytes()).unwrap();
        assert_eq!(g.format, KeyFormat::Wif);
        assert_eq!(g.network, Some(Network::Bitcoin));
        assert_eq!(g.key.to_hex(), HEX_KEY);
    }

    #[test]
    fn broken_wif_falls_through_to_string() {
        let mut broken = WIF_KEY.to_string();
        broken.pop();
        broken.push('K');
        let g = guess(broken.as_bytes()).unwrap();
        assert_eq!(g.format, KeyFormat::String);
        assert_eq!(g.key, PrivKey::from_string(&broken));
    }

    #[test]
    fn strings_are_hashed() {
        let g = guess(b"correct horse battery staple\n").unwrap();
        assert_eq!(g.format, KeyFormat::String);
        assert_eq!(g.key, PrivKey::from_string("correct horse battery staple"));
    }

    #[test]
    fn binary_input_is_raw() {
        let mut raw = [0xffu8; 33];
        raw[32] = 0x01;
        let g = guess(&raw).unwrap();
        assert_eq!(g.format, KeyFormat::Raw);
        assert!(g.key.is_compressed());
        assert_eq!(g.key.as_bytes(), [0xff; 32]);

        // Raw sees the trailing byte even when it is a newline
        let mut raw = [0x80u8; 33];
        raw[32] = b'\n';
        assert_eq!(classify(&raw), None);
        assert!(guess(&raw).is_err());
    }

    #[test]
    fn nothing_matches() {
        assert!(guess(b"").is_err());
        assert!(guess(&[0xff, 0xfe]).is_err());
        assert_eq!(classify(b"\n"), None);
    }

    #[test]
    fn from_guess_delegates() {
        assert_eq!(PrivKey::from_guess(HEX_KEY.as_bytes()).unwrap(), PrivKey::from_hex(HEX_KEY).unwrap());
    }
}

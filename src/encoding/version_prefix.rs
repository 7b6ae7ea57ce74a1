/*
    One byte version prefixes prepended to Base58Check payloads.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    BTCAddress = 0x00,
    BTCTestNetAddress = 0x6F,
    PrivateKeyWIF = 0x80,
    TestNetPrivateKeyWIF = 0xEF
}

impl VersionPrefix {
    pub fn to_bytes(&self) -> Vec<u8> {
        vec![*self as u8]
    }

    pub fn from_int(int: u32) -> Result<Self, ()> {
        Ok(match int {
            0x00 => Self::BTCAddress,
            0x6F => Self::BTCTestNetAddress,
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,

            _ => return Err(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::VersionPrefix;

    #[test]
    fn prefixes_are_single_bytes() {
        assert_eq!(VersionPrefix::BTCAddress.to_bytes(), vec![0x00]);
        assert_eq!(VersionPrefix::BTCTestNetAddress.to_bytes(), vec![0x6F]);
        assert_eq!(VersionPrefix::PrivateKeyWIF.to_bytes(), vec![0x80]);
        assert_eq!(VersionPrefix::TestNetPrivateKeyWIF.to_bytes(), vec![0xEF]);
        assert_eq!(VersionPrefix::from_int(0xEF), Ok(VersionPrefix::TestNetPrivateKeyWIF));
        assert!(VersionPrefix::from_int(0x05).is_err());
    }

    #[test]
    fn every_prefix_is_one_byte_and_parses_back() {
        let all = [
            VersionPrefix::BTCAddress,
            VersionPrefix::BTCTestNetAddress,
            VersionPrefix::PrivateKeyWIF,
            VersionPrefix::TestNetPrivateKeyWIF
        ];
        for prefix in all.iter() {
            let bytes = prefix.to_bytes();
            assert_eq!(bytes.len(), 1);
            assert_eq!(VersionPrefix::from_int(bytes[0] as u32), Ok(*prefix));
        }
    }
}

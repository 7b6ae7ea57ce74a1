/*
    Rehash schedules.

    A key can be turned into a deterministic chain by hashing its scalar
    again and again (key[n] = sha256(key[n-1])). A schedule names the
    depths of that chain the caller wants, e.g. "1,10,100", plus an optional
    wildcard "w" standing for the number at the end of the input string
    ("brainwallet7" -> 7).
*/

use crate::{
    key::PrivKey,
    Error, Result
};

const WILDCARD: &str = "w";
const WILDCARD_MAX: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RehashSchedule {
    depths: Vec<u64>,
    wildcard: bool
}

impl RehashSchedule {
    /**
        Parses a comma separated list of depths. Negative numbers, other
        characters and duplicates are rejected.
    */
    pub fn parse(s: &str) -> Result<Self> {
        let mut depths: Vec<u64> = Vec::new();
        let mut wildcard = false;

        for token in s.split(',') {
            if token == WILDCARD {
                if wildcard {
                    return Err(Error::format("schedule cannot contain duplicate wildcards"));
                }
                wildcard = true;
                continue;
            }
            if token.starts_with('-') {
                return Err(Error::InvalidFormat(format!("schedule cannot contain a negative number: {}", token)));
            }
            if let Some(c) = token.chars().find(|c| !c.is_ascii_digit()) {
                return Err(Error::InvalidFormat(format!("schedule contains unexpected character: {}", c)));
            }
            let depth: u64 = token.parse()
                .map_err(|_| Error::InvalidFormat(format!("invalid schedule entry '{}'", token)))?;
            if depths.contains(&depth) {
                return Err(Error::InvalidFormat(format!("schedule cannot contain duplicate numbers: {}", depth)));
            }
            depths.push(depth);
        }

        depths.sort_unstable();
        Ok(Self { depths, wildcard })
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /**
        The sorted depths with the wildcard substituted by the trailing digits of
        `input`. The wildcard is dropped when there is no input, no trailing number,
        the number is above 1 000 000, or it is already listed.
    */
    pub fn resolve(&self, input: Option<&str>) -> Vec<u64> {
        let mut depths = self.depths.clone();

        if self.wildcard {
            if let Some(depth) = input.and_then(trailing_number) {
                if depth <= WILDCARD_MAX && !depths.contains(&depth) {
                    depths.push(depth);
                    depths.sort_unstable();
                }
            }
        }

        depths
    }

    /**
        Walks the hash chain of `key` and returns the key at every resolved depth.
        `already_hashed` is the depth the key starts at: 1 for keys derived from
        a string or blob (the input was hashed once), 0 otherwise. Depths below
        the starting depth yield the starting key.
    */
    pub fn apply(&self, key: PrivKey, input: Option<&str>, already_hashed: u64) -> Vec<(u64, PrivKey)> {
        let mut current = key;
        let mut total = already_hashed;

        self.resolve(input)
            .into_iter()
            .map(|depth| {
                while total < depth {
                    current.rehash();
                    total += 1;
                }
                (depth, current)
            })
            .collect()
    }
}

fn trailing_number(s: &str) -> Option<u64> {
    let digits = s.bytes().rev().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    s[s.len() - digits..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_depths() {
        let s = RehashSchedule::parse("10,1,5").unwrap();
        assert_eq!(s.resolve(None), vec![1, 5, 10]);
        assert!(!s.has_wildcard());
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert!(RehashSchedule::parse("-1").is_err());
        assert!(RehashSchedule::parse("1,x").is_err());
        assert!(RehashSchedule::parse("3,3").is_err());
        assert!(RehashSchedule::parse("").is_err());
        assert!(RehashSchedule::parse("1,,2").is_err());
        assert!(RehashSchedule::parse("w,w").is_err());
    }

    #[test]
    fn wildcard_takes_trailing_digits() {
        let s = RehashSchedule::parse("w,2").unwrap();
        assert!(s.has_wildcard());
        assert_eq!(s.resolve(Some("brainwallet7")), vec![2, 7]);
        assert_eq!(s.resolve(Some("brainwallet")), vec![2]);
        assert_eq!(s.resolve(Some("brainwallet2")), vec![2]);
        assert_eq!(s.resolve(Some("x1000001")), vec![2]);
        assert_eq!(s.resolve(None), vec![2]);
        assert_eq!(RehashSchedule::parse("w").unwrap().resolve(Some("abc")), Vec::<u64>::new());
    }

    #[test]
    fn apply_walks_the_chain_once() {
        let key = PrivKey::from_string("test");
        let chain = RehashSchedule::parse("3,1").unwrap().apply(key, None, 0);

        let mut expected = key;
        expected.rehash();
        assert_eq!(chain[0], (1, expected));
        expected.rehash();
        expected.rehash();
        assert_eq!(chain[1], (3, expected));
    }

    #[test]
    fn string_inputs_count_as_one_hash() {
        let key = PrivKey::from_string("seed2");
        let chain = RehashSchedule::parse("1,w").unwrap().apply(key, Some("seed2"), 1);

        assert_eq!(chain[0], (1, key));
        let mut second = key;
        second.rehash();
        assert_eq!(chain[1], (2, second));
    }
}

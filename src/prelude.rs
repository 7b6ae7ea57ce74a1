/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keytool::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey,
        Key
    },

    address::{
        Address,
        AddressType
    },

    guess::{
        Guess,
        KeyFormat
    },

    rehash::RehashSchedule,

    vanity::{
        VanityOptions,
        VanitySearch,
        VanityMatch,
        Progress
    },

    encoding::version_prefix::VersionPrefix,

    util::{
        encode_02x,
        decode_02x,
        try_into,
        Network
    },

    Error,
    Result

};

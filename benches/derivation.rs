use btc_keytool::{
    address::{self, Address, AddressType},
    guess,
    key::{PrivKey, PubKey},
    util::Network,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secp256k1::Secp256k1;

const HEX_KEY: &str = "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a";
const WIF_KEY: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";

fn bench_pubkey_derivation(c: &mut Criterion) {
    let key = PrivKey::from_hex(HEX_KEY).unwrap();

    c.bench_function("derive_pubkey", |b| {
        b.iter(|| PubKey::derive(black_box(&key)).unwrap())
    });

    let secp = Secp256k1::signing_only();
    c.bench_function("derive_pubkey_shared_context", |b| {
        b.iter(|| PubKey::derive_with(&secp, black_box(&key)).unwrap())
    });
}

fn bench_address_encoding(c: &mut Criterion) {
    let mut key = PrivKey::from_hex(HEX_KEY).unwrap();
    key.compress();
    let pk = PubKey::derive(&key).unwrap();

    c.bench_function("encode_p2pkh", |b| {
        b.iter(|| address::p2pkh(black_box(&pk), Network::Bitcoin))
    });

    c.bench_function("encode_p2wpkh", |b| {
        b.iter(|| Address::new(black_box(pk), AddressType::P2WPKH, Network::Bitcoin).encode().unwrap())
    });
}

fn bench_guess(c: &mut Criterion) {
    let inputs: Vec<&[u8]> = vec![
        b"115792089237316195423570985008687907852837564279074904382605163141518161494336",
        HEX_KEY.as_bytes(),
        WIF_KEY.as_bytes(),
        b"correct horse battery staple",
    ];

    c.bench_function("guess_formats", |b| {
        b.iter(|| {
            for input in black_box(&inputs) {
                guess::guess(input).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_pubkey_derivation, bench_address_encoding, bench_guess);
criterion_main!(benches);

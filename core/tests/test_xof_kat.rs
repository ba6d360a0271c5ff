use beacon_extender_core::{expand_xof, lookup};
use hex_literal::hex;
use rstest::rstest;
use sha3::Shake128;

const DST: &[u8] = b"BeaconExtenderKAT-v01-with-xof-SHAKE128";

#[rstest]
#[case(
    &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
    DST,
    &hex!("acef075354a00f78d4be23267c6a1febf1e65b8813c167813f0385d4229fea7b"),
)]
#[case(
    &hex!("0a0b0c0d0e0f000102030405060708090a0b0c0d0e0f00010203040506070809"),
    DST,
    &hex!("84"),
)]
#[case(
    &hex!("0a0a000a0a010a0a020a0a030a0a040a0a050a0a060a0a070a0a080a0a090a0b"),
    DST,
    &hex!("dcf9bb78"),
)]
#[case(
    &hex!("c5511916c97b90660eee5bd2e678899cd6946cdd5404d235a127067bfbd4758f"),
    DST,
    &hex!("06ce9bcd92153bd92bf5279490ff2d1c299e61554b470fc29afe1d8def434472"),
)]
#[case(
    &hex!("8876517e60e0a79c4c3ef2877df1f19a6a76aff3550c19a9e9e088a41f813b14"),
    DST,
    &hex!("340323b84c617b0f9da3ca314f0a81d980de69a8767603cf9fa9c61338e91d99fcf76e7001b67d85560e3442deea90722855cb706c321c3599b3df8d0b6ed515"),
)]
#[case(
    &hex!("b2308b0969926631e0d74053ff20b8d167eed55b21803f4d85475b838aee8a54"),
    DST,
    &hex!("7f03175a5e7be6024b6373c1180d569b3df507388770c71de8e3db01b9f0904edf249a8b2c94810142893f2326c6632138ed069e9eaf68fb7014c8e8a1182cd128099f16"),
)]
fn shake128_known_answers(#[case] beacon: &[u8], #[case] dst: &[u8], #[case] expected: &[u8]) {
    let out = expand_xof::<Shake128>(beacon, dst, expected.len()).unwrap();
    assert_eq!(out, expected);

    let via_registry = lookup("SHAKE128").unwrap().expand(beacon, dst, expected.len()).unwrap();
    assert_eq!(via_registry, expected);
}

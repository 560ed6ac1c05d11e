use sha_family::{Algorithm, Digest, Sha1, Sha224, Sha256, Sha384, Sha512};

const M448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const M896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

#[test]
fn empty_input_digests() {
    assert_eq!(Sha1::compute(b"").to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(
        Sha224::compute(b"").to_hex(),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
        Sha256::compute(b"").to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        Sha384::compute(b"").to_hex(),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
        Sha512::compute(b"").to_hex(),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn empty_input_all_three_ways() {
    for alg in Algorithm::ALL {
        let one_shot = alg.compute(b"");
        assert_eq!(alg.compute_reader(&b""[..]).unwrap(), one_shot);
        assert_eq!(alg.hasher().finalize(), one_shot);
    }
}

#[test]
fn abc() {
    assert_eq!(Sha1::compute(b"abc").to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
        Sha224::compute(b"abc").to_hex(),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
    assert_eq!(
        Sha256::compute(b"abc").to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        Sha384::compute(b"abc").to_hex(),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
        Sha512::compute(b"abc").to_hex(),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn two_block_messages() {
    assert_eq!(Sha1::compute(M448).to_hex(), "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
    assert_eq!(
        Sha224::compute(M448).to_hex(),
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
    );
    assert_eq!(
        Sha256::compute(M448).to_hex(),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
    assert_eq!(
        Sha384::compute(M896).to_hex(),
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
    );
    assert_eq!(
        Sha512::compute(M896).to_hex(),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

#[test]
fn one_million_a() {
    let mut h1 = Sha1::new();
    let mut h256 = Sha256::new();
    let mut h512 = Sha512::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        h1.update(&chunk);
        h256.update(&chunk);
        h512.update(&chunk);
    }
    assert_eq!(h1.finalize().to_hex(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    assert_eq!(
        h256.finalize().to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
    assert_eq!(
        h512.finalize().to_hex(),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
    assert_eq!(h512.bytes_processed(), 1_000_000);
}

#[test]
fn digest_and_hex_lengths() {
    let inputs: [&[u8]; 4] = [b"", b"abc", M448, M896];
    for alg in Algorithm::ALL {
        for input in inputs {
            let d = alg.compute(input);
            assert_eq!(d.len(), alg.digest_len());
            assert_eq!(d.as_bytes().len(), alg.digest_len());
            assert_eq!(d.to_hex().len(), 2 * alg.digest_len());
            assert!(d.to_hex().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}

#[test]
fn checksum_round_trip_through_hex() {
    let d = Sha384::compute(b"checksum me");
    let parsed: Digest = d.to_string().parse().unwrap();
    assert_eq!(parsed, d);
    let prefixed = format!("{:#x}", d);
    assert_eq!(prefixed, format!("0x{}", d));
    assert_eq!(prefixed.parse::<Digest>().unwrap(), d);
}

#[test]
fn reset_matches_fresh_instance() {
    let mut reused = Sha224::new();
    reused.update(M448);
    let _ = reused.finalize();
    reused.reset();
    reused.update(b"abc");

    let mut fresh = Sha224::new();
    fresh.update(b"abc");
    assert_eq!(reused.finalize(), fresh.finalize());
    assert_eq!(reused.bytes_processed(), fresh.bytes_processed());
}

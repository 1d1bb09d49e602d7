//! Validate our implementation against the `bs58` crate.
//!
//! Both implementations encode and decode the same inputs independently. If
//! they disagree, ours is wrong.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_bytes(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let len = rng.gen_range(0..96);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    // Force a leading zero run on roughly a quarter of the samples
    if len > 0 && rng.gen_ratio(1, 4) {
        let zeros = rng.gen_range(1..=len);
        data[..zeros].fill(0);
    }
    data
}

#[test]
fn test_hello_world_matches_reference() {
    let reference = bs58::encode(b"Hello World").into_string();
    assert_eq!(reference, "JxF12TrwUP45BMd");
    assert_eq!(b58::encode_bytes_to_string(b"Hello World"), reference);
}

#[test]
fn test_random_encode_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed_b58);
    for _ in 0..500 {
        let data = random_bytes(&mut rng);
        let ours = b58::encode_bytes(&data);
        let reference = bs58::encode(&data).into_vec();
        assert_eq!(ours, reference, "mismatch for data {}", hex::encode(&data));
    }
}

#[test]
fn test_random_decode_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xdec0de);
    for _ in 0..500 {
        let data = random_bytes(&mut rng);
        let encoded = bs58::encode(&data).into_string();
        let ours = b58::decode_bytes(encoded.as_bytes()).unwrap();
        assert_eq!(ours, data, "mismatch for {encoded}");
    }
}

#[test]
fn test_random_decode_into_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let data = random_bytes(&mut rng);
        let encoded = bs58::encode(&data).into_string();
        let capacity = rng.gen_range(0..=data.len() + 4);
        let mut dest = vec![0xaau8; capacity];

        let result = b58::decode_into(&encoded, &mut dest).unwrap();
        let written = data.len().min(capacity);
        assert_eq!(result.read, encoded.len());
        assert_eq!(result.decoded, data.len());
        assert_eq!(result.written, written);
        assert_eq!(&dest[..written], &data[..written]);
    }
}

#[test]
fn test_invalid_input_rejected_by_both() {
    for input in ["0", "abc0", "O1", "1I", "l", "a b"] {
        assert!(bs58::decode(input).into_vec().is_err());
        assert!(b58::decode_bytes(input.as_bytes()).is_err());
        assert!(!b58::is_valid(input));
    }
}

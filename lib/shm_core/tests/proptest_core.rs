use proptest::prelude::*;

use shm_core::decode::decode;
use shm_core::lagrange::{reconstruct, reconstruct_exact};
use shm_core::types::Share;

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn digits_in_base() -> impl Strategy<Value = (u32, String)> {
    (2u32..=36).prop_flat_map(|base| {
        let digit = (0..base).prop_map(|d| DIGITS[d as usize] as char);
        (
            Just(base),
            prop::collection::vec(digit, 1..20).prop_map(|v| v.into_iter().collect::<String>()),
        )
    })
}

fn polynomial_shares() -> impl Strategy<Value = (i128, Vec<Share>)> {
    (1usize..=7).prop_flat_map(|k| {
        (
            prop::collection::vec(-1_000_000i64..=1_000_000, k),
            Just((1u64..=20).collect::<Vec<_>>()).prop_shuffle(),
        )
            .prop_map(move |(coeffs, xs)| {
                let shares = xs[..k]
                    .iter()
                    .map(|&x| {
                        let y = coeffs
                            .iter()
                            .rev()
                            .fold(0i128, |acc, &c| acc * i128::from(x) + i128::from(c));
                        Share::new(x, y)
                    })
                    .collect();
                (i128::from(coeffs[0]), shares)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn decode_matches_positional_arithmetic((base, encoded) in digits_in_base()) {
        let expected = i128::from_str_radix(&encoded, base).unwrap();
        prop_assert_eq!(decode(1, base, &encoded).unwrap().y, expected);
        prop_assert_eq!(decode(1, base, &encoded.to_uppercase()).unwrap().y, expected);
    }

    #[test]
    fn exact_reconstruction_recovers_constant_term((secret, shares) in polynomial_shares()) {
        prop_assert_eq!(reconstruct_exact(&shares).unwrap(), secret);
    }

    #[test]
    fn exact_reconstruction_ignores_order((secret, mut shares) in polynomial_shares()) {
        shares.reverse();
        prop_assert_eq!(reconstruct_exact(&shares).unwrap(), secret);
        shares.rotate_left(1);
        prop_assert_eq!(reconstruct_exact(&shares).unwrap(), secret);
    }

    #[test]
    fn float_reconstruction_is_deterministic((_secret, shares) in polynomial_shares()) {
        prop_assert_eq!(reconstruct(&shares), reconstruct(&shares));
    }
}

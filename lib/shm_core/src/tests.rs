use crate::{
    config::{Arithmetic, Limits},
    decode::{decode, decode_raw},
    error::ShareError,
    lagrange::{interpolate_exact, reconstruct, reconstruct_exact, reconstruct_with},
    types::{RawShare, ReconstructionRequest, Share},
};
use rand::{Rng, seq::SliceRandom};

fn eval(coeffs: &[i128], x: u64) -> i128 {
    coeffs
        .iter()
        .rev()
        .fold(0i128, |acc, c| acc * i128::from(x) + c)
}

#[test]
fn test_sample_request() {
    // --- 1. DECODE ---
    let raw = vec![
        RawShare::new(1, 10, "4"),
        RawShare::new(2, 2, "111"),
        RawShare::new(3, 10, "12"),
        RawShare::new(6, 4, "213"),
    ];
    let limits = Limits::default();
    let decoded = raw
        .iter()
        .map(|r| decode_raw(&limits, r))
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to decode sample shares");

    assert_eq!(
        decoded,
        vec![
            Share::new(1, 4),
            Share::new(2, 7),
            Share::new(3, 12),
            Share::new(6, 39)
        ]
    );

    // --- 2. SELECT ---
    let request = ReconstructionRequest::new(3, decoded).expect("Valid threshold");
    let selected = request.selected().expect("Enough shares");
    assert_eq!(selected.len(), 3);

    // --- 3. RECONSTRUCT ---
    // The shares lie on P(x) = x^2 + 3, so the secret is 3.
    assert_eq!(reconstruct(selected), Ok(3));
    assert_eq!(reconstruct_exact(selected), Ok(3));

    // Any other subset of the sample agrees, share 6 included.
    let shares = request.get_shares();
    assert_eq!(reconstruct(&shares[1..]), Ok(3));
    assert_eq!(reconstruct(&[shares[0], shares[2], shares[3]]), Ok(3));
}

#[test]
fn test_positional_decoding() {
    assert_eq!(decode(1, 2, "111").map(|s| s.y), Ok(7));
    assert_eq!(decode(1, 4, "213").map(|s| s.y), Ok(39));
    assert_eq!(decode(1, 10, "12").map(|s| s.y), Ok(12));
    assert_eq!(decode(1, 10, "4").map(|s| s.y), Ok(4));
    assert_eq!(decode(1, 16, "e1b5e05623d881f").map(|s| s.y), Ok(1016509518118225951));
}

#[test]
fn test_invalid_digit() {
    assert_eq!(
        decode(2, 2, "2"),
        Err(ShareError::InvalidEncoding {
            identifier: 2,
            character: '2',
            base: 2
        })
    );
}

#[test]
fn test_known_quadratic() {
    // P(x) = 2x^2 + x + 1
    let shares = [Share::new(1, 4), Share::new(2, 11), Share::new(3, 22)];
    assert_eq!(reconstruct(&shares), Ok(1));
    assert_eq!(reconstruct_exact(&shares), Ok(1));
}

#[test]
fn test_order_independence() {
    let shares = [Share::new(1, 4), Share::new(2, 11), Share::new(3, 22)];
    let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for p in permutations {
        let permuted = p.map(|i| shares[i]);
        assert_eq!(reconstruct(&permuted), Ok(1));
        assert_eq!(reconstruct_exact(&permuted), Ok(1));
    }
}

#[test]
fn test_idempotence() {
    let shares = [Share::new(2, 7), Share::new(3, 12), Share::new(6, 39)];
    assert_eq!(reconstruct(&shares), reconstruct(&shares));
    assert_eq!(interpolate_exact(&shares), interpolate_exact(&shares));
    assert_eq!(decode(6, 4, "213"), decode(6, 4, "213"));
}

#[test]
fn test_duplicate_identifier() {
    let shares = [Share::new(2, 7), Share::new(2, 7)];
    assert_eq!(reconstruct(&shares), Err(ShareError::DegenerateInput { x: 2 }));
}

#[test]
fn test_insufficient_shares() {
    let request = ReconstructionRequest::new(4, vec![Share::new(1, 4), Share::new(2, 7)])
        .expect("Valid threshold");
    assert_eq!(
        request.selected(),
        Err(ShareError::InsufficientShares {
            threshold: 4,
            available: 2
        })
    );
    assert_eq!(
        ReconstructionRequest::new(0, vec![]),
        Err(ShareError::InvalidThreshold(0))
    );
}

#[test]
fn test_large_values_need_exact() {
    // Shares 1, 3, 4, 5, 6, 7 and 9 of the ten share sample document; their
    // y-values go past 2^64 and double precision drifts by thousands.
    let shares = [
        Share::new(1, 995085094601491),
        Share::new(3, 196563650089608567),
        Share::new(4, 1016509518118225951),
        Share::new(5, 3711974121218449851),
        Share::new(6, 10788619898233492461),
        Share::new(7, 26709394976508342463),
        Share::new(9, 117852986202006511971),
    ];
    let exact = interpolate_exact(&shares).expect("Distinct shares");
    assert!(exact.is_integer());
    assert_eq!(reconstruct_exact(&shares), Ok(79836264049851));
    assert_ne!(reconstruct(&shares), Ok(79836264049851));
}

#[test]
fn test_random_polynomials() {
    let mut rng = rand::thread_rng();
    let mut xs: Vec<u64> = (1..=12).collect();

    for _ in 0..200 {
        let k = rng.gen_range(1..=6usize);
        let coeffs: Vec<i128> = (0..k).map(|_| rng.gen_range(-1000..=1000)).collect();
        xs.shuffle(&mut rng);

        let shares: Vec<Share> = xs[..k]
            .iter()
            .map(|&x| Share::new(x, eval(&coeffs, x)))
            .collect();

        assert_eq!(reconstruct_with(Arithmetic::Exact, &shares), Ok(coeffs[0]));
        assert_eq!(reconstruct_with(Arithmetic::Float, &shares), Ok(coeffs[0]));
    }
}

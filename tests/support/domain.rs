//! Builders for domain values used across tests.

use luckybet::domain::{EachWay, FinishingPlaces, Horse, Odds};
use num_bigint::BigInt;
use num_rational::BigRational;

/// Exact fraction `n/d`.
pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Whole amount `n`.
pub fn whole(n: i64) -> BigRational {
    ratio(n, 1)
}

/// A selection at `at:to`, optionally each-way at `(odds_divisor, max_place)`.
pub fn horse(name: &str, at: i64, to: i64, each_way: Option<(u32, u32)>) -> Horse {
    Horse::new(
        name,
        Odds::try_new(at, to).expect("valid odds"),
        each_way.map(|(divisor, places)| EachWay::try_new(divisor, places).expect("valid terms")),
    )
}

/// A results card from `(name, place)` pairs.
pub fn places(pairs: &[(&str, u32)]) -> FinishingPlaces {
    FinishingPlaces::try_from_pairs(pairs.iter().copied()).expect("valid places")
}

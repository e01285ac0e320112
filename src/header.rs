// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use rand::{seq::SliceRandom, Rng};

use crate::config::HeaderLength;
use crate::errors::Result;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of digits in a header of `length` characters, i.e. `round(length / 3)`. A third of an
/// integer is never exactly halfway between two integers, so no tie-breaking rule is involved.
pub fn digit_count(length: usize) -> usize {
    (length + 1) / 3
}

/// Makes a random header of uppercase letters and digits.
///
/// The letters and digits are drawn first, in the exact proportions given by `digit_count()`,
/// and only then shuffled together. Every header of a given length thus has the same number of
/// digits. Nothing prevents two calls from returning the same header.
pub fn random_header<R: Rng + ?Sized>(rng: &mut R, length: HeaderLength) -> String {
    let length = length.get();
    let num_digits = digit_count(length);
    let mut chars: Vec<u8> = Vec::with_capacity(length);
    chars.extend((0..length - num_digits).map(|_| LETTERS[rng.random_range(0..LETTERS.len())]));
    chars.extend((0..num_digits).map(|_| b'0' + rng.random_range(0..10u8)));
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

/// Like `random_header()`, but takes an unchecked length: zero or negative lengths are an
/// `InvalidConfiguration` error.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: i64) -> Result<String> {
    Ok(random_header(rng, HeaderLength::new(length)?))
}

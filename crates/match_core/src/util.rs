//! Small helpers shared by the balancer and the selector.

use rand::Rng;

use crate::error::{MatchError, Result};

/// Picks one element uniformly at random. Fails fast on an empty slice.
pub fn random_element<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    if items.is_empty() {
        return Err(MatchError::InvalidCollection);
    }
    Ok(&items[rng.gen_range(0..items.len())])
}

//! Shuffler - picks the symbols for a round and lays the cards out.
//!
//! Stateless: every function is a pure function of its inputs and the RNG
//! stream handed in.

use crate::error::{MemoryError, Result};
use crate::rng::DealRng;
use crate::types::{Card, Symbol};

/// Select `pair_count` distinct symbols uniformly at random from `pool`.
///
/// Fails with [`MemoryError::InvalidInput`] when the pool is too small.
pub fn pick_pairs(pool: &[Symbol], pair_count: usize, rng: &mut DealRng) -> Result<Vec<Symbol>> {
    if pair_count > pool.len() {
        return Err(MemoryError::invalid(format!(
            "{} pairs requested from a pool of {} symbols",
            pair_count,
            pool.len()
        )));
    }

    Ok(rng
        .sample_indices(pool.len(), pair_count)
        .into_iter()
        .map(|i| pool[i])
        .collect())
}

/// Return a uniformly random permutation of `symbols`.
pub fn shuffle_all(mut symbols: Vec<Symbol>, rng: &mut DealRng) -> Vec<Symbol> {
    rng.shuffle(&mut symbols);
    symbols
}

/// Build a face-down table: pick the pairs, double each symbol, shuffle.
pub fn deal(pool: &[Symbol], pair_count: usize, rng: &mut DealRng) -> Result<Vec<Card>> {
    let picked = pick_pairs(pool, pair_count, rng)?;

    let mut doubled = Vec::with_capacity(pair_count * 2);
    doubled.extend_from_slice(&picked);
    doubled.extend_from_slice(&picked);

    Ok(shuffle_all(doubled, rng).into_iter().map(Card::new).collect())
}

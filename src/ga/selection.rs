//! Parent selection.
//!
//! Selection is fitness-blind: parents are drawn uniformly from the current
//! population. Each slot retries a bounded number of times to avoid picking
//! an index already chosen in the same call, then accepts the duplicate.

use super::types::Coloring;
use rand::Rng;

/// Parents per offspring.
pub const PARENT_COUNT: usize = 2;

/// Draws per parent slot before a duplicate index is accepted.
pub const MAX_DRAWS: usize = 10;

/// Picks [`PARENT_COUNT`] parents uniformly at random.
///
/// Never fails on a non-empty population: with a single individual it is
/// returned in every slot.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parents<'a, R: Rng>(
    population: &'a [Coloring],
    rng: &mut R,
) -> [&'a Coloring; PARENT_COUNT] {
    let [a, b] = select_indices(population.len(), rng);
    [&population[a], &population[b]]
}

/// Index-level form of [`select_parents`].
pub fn select_indices<R: Rng>(population_size: usize, rng: &mut R) -> [usize; PARENT_COUNT] {
    assert!(population_size > 0, "cannot select from empty population");

    let mut chosen = [0usize; PARENT_COUNT];
    for slot in 0..PARENT_COUNT {
        let mut index = 0;
        for _ in 0..MAX_DRAWS {
            index = rng.random_range(0..population_size);
            if !chosen[..slot].contains(&index) {
                break;
            }
        }
        chosen[slot] = index;
    }
    chosen
}

use rand::Rng;

use crate::error::CoreError;

/// Fraction of the sampling step used as the jitter half-width.
pub const JITTER_RATIO: f64 = 0.1;

/// Picks up to `limit` items spread evenly across `items`, with a small
/// random offset applied to every picked index.
///
/// Uses the thread-local RNG. See [`sample_evenly_with_rng`] for the details.
pub fn sample_evenly<T: Clone>(items: &[T], limit: usize) -> Result<Vec<T>, CoreError> {
	let mut rng = rand::rng();
	sample_evenly_with_rng(items, limit, &mut rng)
}

/// Even sampling with a caller-supplied RNG.
///
/// # Behavior
/// - `limit >= items.len()`: every item is returned, in the original order, no jitter.
/// - `limit == 0`: empty result.
/// - Otherwise the step `len / limit` (real-valued) gives base indices
///   `floor(i * step)`, each shifted by a uniform offset in
///   `[-floor(step * 0.1), +floor(step * 0.1)]` and clamped to `[0, len - 1]`.
///
/// Two jittered indices may land on the same item; the duplicate is kept.
///
/// # Errors
/// Returns [`CoreError::NoItems`] if `items` is empty.
pub fn sample_evenly_with_rng<T: Clone, R: Rng + ?Sized>(
	items: &[T],
	limit: usize,
	rng: &mut R,
) -> Result<Vec<T>, CoreError> {
	if items.is_empty() {
		return Err(CoreError::NoItems);
	}

	let len = items.len();
	let sample_size = limit.min(len);
	if sample_size == len {
		return Ok(items.to_vec());
	}
	if sample_size == 0 {
		return Ok(Vec::new());
	}

	let bound = jitter_bound(len, sample_size) as i64;
	let last = (len - 1) as i64;

	let sampled = base_indices(len, sample_size)
		.into_iter()
		.map(|idx| {
			let offset = rng.random_range(-bound..=bound);
			(idx as i64 + offset).clamp(0, last) as usize
		})
		.map(|idx| items[idx].clone())
		.collect();

	Ok(sampled)
}

fn step(len: usize, sample_size: usize) -> f64 {
	len as f64 / sample_size as f64
}

/// Evenly spaced base indices `floor(i * len / sample_size)` for `i in 0..sample_size`.
///
/// Returns an empty vector when `sample_size` is 0.
pub fn base_indices(len: usize, sample_size: usize) -> Vec<usize> {
	if sample_size == 0 {
		return Vec::new();
	}
	let step = step(len, sample_size);
	(0..sample_size).map(|i| (i as f64 * step) as usize).collect()
}

/// Half-width of the jitter window, `floor(step * 0.1)`.
pub fn jitter_bound(len: usize, sample_size: usize) -> usize {
	if sample_size == 0 {
		return 0;
	}
	(step(len, sample_size) * JITTER_RATIO) as usize
}

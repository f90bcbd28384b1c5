// symnmf-core/src/distance.rs
//! Distance metrics and the kernel that turns them into graph edge weights.
//!
//! The similarity graph uses the unit-bandwidth Gaussian kernel
//! `w = exp(-‖xᵢ - xⱼ‖² / 2)`:
//! - distance 0 → weight 1 (coincident points)
//! - distance ∞ → weight 0 (no affinity)

/// Squared Euclidean distance for slices (no square root).
pub fn squared_euclidean_distance(vec_i: &[f64], vec_j: &[f64]) -> f64 {
    debug_assert_eq!(vec_i.len(), vec_j.len());
    vec_i
        .iter()
        .zip(vec_j.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum()
}

/// Euclidean L2 distance for slices.
pub fn euclidean_distance(vec_i: &[f64], vec_j: &[f64]) -> f64 {
    squared_euclidean_distance(vec_i, vec_j).sqrt()
}

/// Gaussian affinity of a squared distance: `exp(-d² / 2)`.
#[inline]
pub fn gaussian_affinity(squared_distance: f64) -> f64 {
    (-squared_distance / 2.0).exp()
}

//! Scatter and gather permutation of sequences.
//!
//! A permutation vector `p` of length `L` is a bijection on `[0, L)`.
//! [`permute`] applies it in scatter form: the element at source index
//! `i` moves to destination index `p[i]`. [`invert_permutation`] derives
//! the gather form that undoes the scatter.

/// Reorders a sequence according to a permutation vector (scatter).
///
/// Produces a new sequence where `result[permutation[i]] = sequence[i]`.
///
/// # Parameters
/// - `sequence`: The elements to reorder.
/// - `permutation`: A bijection on `[0, sequence.len())`.
///
/// # Returns
/// The reordered sequence.
///
/// # Panics
/// Panics if the lengths differ or if `permutation` is not a bijection on
/// its index range. Cipher constructors validate keys up front, so cipher
/// paths never reach this panic.
pub fn permute<T: Clone>(sequence: &[T], permutation: &[usize]) -> Vec<T> {
    assert_eq!(
        sequence.len(),
        permutation.len(),
        "sequence and permutation lengths differ"
    );
    let mut slots: Vec<Option<T>> = vec![None; permutation.len()];
    for (i, item) in sequence.iter().enumerate() {
        let dest = permutation[i];
        assert!(
            slots[dest].is_none(),
            "permutation is not a bijection: duplicate destination {}",
            dest
        );
        slots[dest] = Some(item.clone());
    }
    slots
        .into_iter()
        .map(|slot| slot.expect("permutation is not a bijection"))
        .collect()
}

/// Computes the inverse (gather) form of a permutation vector.
///
/// The inverse satisfies `inverse[permutation[i]] = i`, so applying
/// [`permute`] with the inverse undoes a scatter with the original.
///
/// # Parameters
/// - `permutation`: A bijection on `[0, permutation.len())`.
///
/// # Returns
/// The inverse permutation vector.
///
/// # Panics
/// Panics if `permutation` contains an index outside its range.
pub fn invert_permutation(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; permutation.len()];
    for (i, &dest) in permutation.iter().enumerate() {
        inverse[dest] = i;
    }
    inverse
}

use super::monomials::NUM_VARIABLES;

/// A relabelling of the internal coordinates, read as `y[i] = x[perm[i]]`.
pub type Permutation = [usize; NUM_VARIABLES];

pub const IDENTITY: Permutation = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Involutions generating the permutation group of the dimer's equivalent atoms.
///
/// The first two exchange the hydrogens within each monomer, the third exchanges
/// the monomers themselves. Every monomial of the basis is invariant under them.
pub const SYMMETRY_GENERATORS: [Permutation; 3] = [
    [0, 1, 2, 4, 3, 5, 6, 8, 7, 9, 10, 12, 11, 14, 13],
    [1, 0, 2, 3, 4, 5, 6, 7, 8, 10, 9, 13, 14, 11, 12],
    [3, 4, 5, 0, 1, 2, 6, 9, 10, 7, 8, 11, 13, 12, 14],
];

/// Applies `perm` to a coordinate vector.
#[inline]
pub fn permute(x: &[f64; NUM_VARIABLES], perm: &Permutation) -> [f64; NUM_VARIABLES] {
    std::array::from_fn(|i| x[perm[i]])
}

/// Composes two permutations so that applying the result equals applying
/// `first` and then `second`.
pub fn compose(first: &Permutation, second: &Permutation) -> Permutation {
    std::array::from_fn(|i| first[second[i]])
}

/// Enumerates the full symmetry group generated by [`SYMMETRY_GENERATORS`].
///
/// The identity is always the first element; the remaining elements follow in
/// breadth-first order of generation.
pub fn symmetry_group() -> Vec<Permutation> {
    let mut group = vec![IDENTITY];
    let mut cursor = 0;
    while cursor < group.len() {
        let current = group[cursor];
        for generator in &SYMMETRY_GENERATORS {
            let next = compose(&current, generator);
            if !group.contains(&next) {
                group.push(next);
            }
        }
        cursor += 1;
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::polynomial::model::PolyModel;
    use crate::core::polynomial::monomials::{NUM_TERMS, evaluate_monomials};

    const TOLERANCE: f64 = 1e-12;

    fn sample_coordinates() -> [f64; NUM_VARIABLES] {
        [
            0.31, -0.72, 1.05, 0.44, -0.19, 0.83, -1.27, 0.58, -0.36, 0.91, 0.12, -0.64, 0.27,
            1.33, -0.48,
        ]
    }

    fn sample_coefficients() -> [f64; NUM_TERMS] {
        std::array::from_fn(|i| ((i as f64) * 0.37).sin() * 10.0)
    }

    fn is_permutation(perm: &Permutation) -> bool {
        let mut seen = [false; NUM_VARIABLES];
        for &i in perm {
            if i >= NUM_VARIABLES || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    #[test]
    fn generators_are_involutions() {
        for generator in &SYMMETRY_GENERATORS {
            assert!(is_permutation(generator));
            assert_eq!(compose(generator, generator), IDENTITY);
        }
    }

    #[test]
    fn group_has_eight_elements_starting_with_identity() {
        let group = symmetry_group();
        assert_eq!(group.len(), 8);
        assert_eq!(group[0], IDENTITY);
        assert!(group.iter().all(is_permutation));
    }

    #[test]
    fn group_is_closed_under_composition() {
        let group = symmetry_group();
        for g in &group {
            for h in &group {
                assert!(group.contains(&compose(g, h)));
            }
        }
    }

    #[test]
    fn permute_with_identity_returns_input() {
        let x = sample_coordinates();
        assert_eq!(permute(&x, &IDENTITY), x);
    }

    #[test]
    fn compose_matches_sequential_application() {
        let x = sample_coordinates();
        let [g1, g2, g3] = SYMMETRY_GENERATORS;
        let sequential = permute(&permute(&permute(&x, &g1), &g2), &g3);
        let composed = permute(&x, &compose(&compose(&g1, &g2), &g3));
        assert_eq!(sequential, composed);
    }

    #[test]
    fn every_monomial_is_invariant_under_the_group() {
        let x = sample_coordinates();
        let reference = evaluate_monomials(&x);
        for perm in symmetry_group() {
            let p = evaluate_monomials(&permute(&x, &perm));
            for i in 0..NUM_TERMS {
                assert!(
                    (p[i] - reference[i]).abs() < TOLERANCE,
                    "p[{i}] changed under {perm:?}"
                );
            }
        }
    }

    #[test]
    fn energy_is_invariant_under_monomer_exchange() {
        let x = sample_coordinates();
        let a = sample_coefficients();
        let exchanged = permute(&x, &SYMMETRY_GENERATORS[2]);
        let e1 = PolyModel::eval_direct(&a, &x);
        let e2 = PolyModel::eval_direct(&a, &exchanged);
        assert!((e1 - e2).abs() < TOLERANCE, "{e1} != {e2}");
    }

    #[test]
    fn swapping_a_single_intermolecular_block_is_not_a_symmetry() {
        let x = sample_coordinates();
        let a = sample_coefficients();
        // (x7, x8) <-> (x9, x10) alone, without exchanging the monomers' own coordinates.
        let block_swap: Permutation = [0, 1, 2, 3, 4, 5, 6, 9, 10, 7, 8, 11, 12, 13, 14];
        let e1 = PolyModel::eval_direct(&a, &x);
        let e2 = PolyModel::eval_direct(&a, &permute(&x, &block_swap));
        assert!((e1 - e2).abs() > 1e-6);
    }
}

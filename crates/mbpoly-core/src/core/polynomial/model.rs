use super::monomials::{NUM_TERMS, NUM_VARIABLES, evaluate_monomials};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PolyError {
    #[error("Invalid argument: expected {expected} {what}, got {actual}")]
    InvalidArgument {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Two-body polynomial model of the water dimer.
///
/// The model carries no state: the monomial basis is fixed and the fitted
/// coefficients are supplied on every call.
pub struct PolyModel;

impl PolyModel {
    /// Evaluates the polynomial energy for fixed-size inputs.
    ///
    /// The energy is accumulated as a single running sum over the terms in index
    /// order, so results are reproducible against the reference evaluator.
    #[inline]
    pub fn eval_direct(a: &[f64; NUM_TERMS], x: &[f64; NUM_VARIABLES]) -> f64 {
        let p = evaluate_monomials(x);

        let mut energy = 0.0;
        for (term, coefficient) in p.iter().zip(a) {
            energy += term * coefficient;
        }
        energy
    }

    /// Evaluates the polynomial energy for slices of unknown length.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `x` does not hold exactly
    /// [`NUM_VARIABLES`] values or `a` does not hold exactly [`NUM_TERMS`] values.
    /// Coordinates are checked before coefficients, and nothing is computed
    /// when either check fails.
    pub fn eval(a: &[f64], x: &[f64]) -> Result<f64, PolyError> {
        let x: &[f64; NUM_VARIABLES] = x.try_into().map_err(|_| PolyError::InvalidArgument {
            what: "coordinates",
            expected: NUM_VARIABLES,
            actual: x.len(),
        })?;
        let a: &[f64; NUM_TERMS] = a.try_into().map_err(|_| PolyError::InvalidArgument {
            what: "coefficients",
            expected: NUM_TERMS,
            actual: a.len(),
        })?;
        Ok(Self::eval_direct(a, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
    }

    fn ramp_coordinates() -> [f64; NUM_VARIABLES] {
        std::array::from_fn(|i| (i + 1) as f64)
    }

    fn ramp_coefficients() -> [f64; NUM_TERMS] {
        std::array::from_fn(|i| (i + 1) as f64)
    }

    fn mixed_coordinates() -> [f64; NUM_VARIABLES] {
        [
            0.5, -0.25, 1.5, 0.75, -1.0, 0.125, 2.0, -0.5, 0.25, 1.0, -0.75, 0.375, -1.25, 0.625,
            1.75,
        ]
    }

    fn pseudo_random_coefficients(seed: u64) -> [f64; NUM_TERMS] {
        let mut state = seed;
        std::array::from_fn(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
    }

    #[test]
    fn zero_coordinates_yield_zero_energy_for_any_coefficients() {
        let x = [0.0; NUM_VARIABLES];
        assert_eq!(PolyModel::eval_direct(&ramp_coefficients(), &x), 0.0);
        assert_eq!(
            PolyModel::eval_direct(&pseudo_random_coefficients(7), &x),
            0.0
        );
        assert_eq!(PolyModel::eval_direct(&[1e300; NUM_TERMS], &x), 0.0);
    }

    #[test]
    fn isolated_x6_yields_sum_of_linear_and_square_coefficients() {
        let mut x = [0.0; NUM_VARIABLES];
        x[6] = 1.0;
        let a = pseudo_random_coefficients(42);
        assert_eq!(PolyModel::eval_direct(&a, &x), a[2] + a[23]);
    }

    #[test]
    fn isolated_x0_yields_zero_energy() {
        let mut x = [0.0; NUM_VARIABLES];
        x[0] = 1.0;
        assert_eq!(PolyModel::eval_direct(&[1.0; NUM_TERMS], &x), 0.0);
    }

    #[test]
    fn ramp_coordinates_with_unit_coefficients_match_reference() {
        let energy = PolyModel::eval_direct(&[1.0; NUM_TERMS], &ramp_coordinates());
        assert_eq!(energy, 7653.0);
    }

    #[test]
    fn ramp_coordinates_with_ramp_coefficients_match_reference() {
        let energy = PolyModel::eval_direct(&ramp_coefficients(), &ramp_coordinates());
        assert_eq!(energy, 106737.0);
    }

    #[test]
    fn sparse_coordinates_with_ramp_coefficients_match_reference() {
        let mut x = [0.0; NUM_VARIABLES];
        x[7] = 2.0;
        x[11] = 3.0;
        // 3*a0 + 2*a1 + 4*a15 + 6*a16 + 9*a22
        assert_eq!(PolyModel::eval_direct(&ramp_coefficients(), &x), 380.0);
    }

    #[test]
    fn mixed_sign_coordinates_match_reference() {
        let x = mixed_coordinates();
        assert_eq!(PolyModel::eval_direct(&ramp_coefficients(), &x), 274.34375);
        assert_eq!(PolyModel::eval_direct(&[1.0; NUM_TERMS], &x), 20.828125);
    }

    #[test]
    fn energy_is_linear_in_coefficients() {
        let x = mixed_coordinates();
        let a1 = pseudo_random_coefficients(1);
        let a2 = pseudo_random_coefficients(2);
        let sum: [f64; NUM_TERMS] = std::array::from_fn(|i| a1[i] + a2[i]);

        let lhs = PolyModel::eval_direct(&sum, &x);
        let rhs = PolyModel::eval_direct(&a1, &x) + PolyModel::eval_direct(&a2, &x);
        assert!(f64_approx_equal(lhs, rhs), "{lhs} != {rhs}");
    }

    #[test]
    fn scaling_coefficients_scales_energy() {
        let x = ramp_coordinates();
        let a = pseudo_random_coefficients(3);
        for k in [-2.5, 0.0, 0.5, 3.0] {
            let scaled: [f64; NUM_TERMS] = std::array::from_fn(|i| k * a[i]);
            let lhs = PolyModel::eval_direct(&scaled, &x);
            let rhs = k * PolyModel::eval_direct(&a, &x);
            assert!(f64_approx_equal(lhs, rhs), "k = {k}: {lhs} != {rhs}");
        }
    }

    #[test]
    fn eval_matches_eval_direct_for_correct_lengths() {
        let a = pseudo_random_coefficients(11);
        let x = mixed_coordinates();
        let checked = PolyModel::eval(a.as_slice(), x.as_slice()).unwrap();
        assert_eq!(checked.to_bits(), PolyModel::eval_direct(&a, &x).to_bits());
    }

    #[test]
    fn eval_rejects_short_and_long_coordinates() {
        let a = [1.0; NUM_TERMS];
        for len in [14, 16] {
            let x = vec![1.0; len];
            assert_eq!(
                PolyModel::eval(&a, &x),
                Err(PolyError::InvalidArgument {
                    what: "coordinates",
                    expected: NUM_VARIABLES,
                    actual: len,
                })
            );
        }
    }

    #[test]
    fn eval_rejects_short_and_long_coefficients() {
        let x = [1.0; NUM_VARIABLES];
        for len in [23, 25] {
            let a = vec![1.0; len];
            assert_eq!(
                PolyModel::eval(&a, &x),
                Err(PolyError::InvalidArgument {
                    what: "coefficients",
                    expected: NUM_TERMS,
                    actual: len,
                })
            );
        }
    }

    #[test]
    fn eval_reports_coordinates_first_when_both_lengths_are_wrong() {
        let result = PolyModel::eval(&[1.0; 3], &[1.0; 2]);
        assert!(matches!(
            result,
            Err(PolyError::InvalidArgument {
                what: "coordinates",
                ..
            })
        ));
    }

    #[test]
    fn invalid_argument_error_message_names_the_input() {
        let err = PolyModel::eval(&[1.0; 23], &[0.0; NUM_VARIABLES]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected 24 coefficients, got 23"
        );
    }
}

use num::{complex::Complex64, Zero};

/// Full discrete convolution, i.e. the coefficients of the product of two
/// polynomials.
pub(crate) fn convolve_1d(input: &[Complex64], kernel: &[Complex64]) -> Vec<Complex64> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    debug_assert!(input_len + kernel_len > 0);
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![Complex64::zero(); output_len];

    for (i, x) in input.iter().enumerate() {
        for (j, k) in kernel.iter().enumerate() {
            output[i + j] += x * k;
        }
    }
    output
}

#[cfg(test)]
mod test {
    use super::convolve_1d;

    #[test]
    fn product_of_linear_factors() {
        // (x - 1)(x + 2) = x^2 + x - 2
        let out = convolve_1d(
            &[complex!(1.0), complex!(-1.0)],
            &[complex!(1.0), complex!(2.0)],
        );
        assert_eq!(out, vec![complex!(1.0), complex!(1.0), complex!(-2.0)]);
    }

    #[test]
    fn identity() {
        let p = [complex!(3.0), complex!(0.0, 1.0)];
        assert_eq!(convolve_1d(&p, &[complex!(1.0)]), p.to_vec());
    }
}

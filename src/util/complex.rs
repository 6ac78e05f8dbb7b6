// helpers for sorting and printing Complex64

use num::complex::Complex64;

/// Sort lexicographically, real part first. NaNs go last.
pub(crate) fn complex_sort_mut(v: &mut [Complex64]) {
    v.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
}

/// Compact form used when printing whole polynomials: `2`, `(2+i)`, `(2-1.5i)`.
pub(crate) fn complex_fmt(c: &Complex64) -> String {
    let (r, m) = (c.re, c.im.abs());
    let sign = if c.im.is_sign_negative() { '-' } else { '+' };
    if m == 0.0 {
        format!("{r}")
    } else if (m - 1.0).abs() < f64::EPSILON {
        format!("({r}{sign}i)")
    } else {
        format!("({r}{sign}{m}i)")
    }
}

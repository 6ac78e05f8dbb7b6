use itertools::Itertools;

use crate::{util::doc_macros::errors_parse, Error, Result};

/// Parse a list of real coefficients, highest degree first.
///
/// Tokens are separated by any run of whitespace, `,` or `;`.
///
/// ```
/// use poly_solve::parse_coeffs;
///
/// assert_eq!(parse_coeffs("1, 0, -2, 1").unwrap(), vec![1.0, 0.0, -2.0, 1.0]);
/// assert_eq!(parse_coeffs("1,0; -2,1").unwrap(), vec![1.0, 0.0, -2.0, 1.0]);
/// ```
///
/// # Errors
#[doc = errors_parse!()]
pub fn parse_coeffs(text: &str) -> Result<Vec<f64>> {
    let coeffs: Vec<f64> = text
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .try_collect()?;

    if coeffs.is_empty() {
        return Err(Error::NoCoefficients);
    }
    log::debug!("parsed {} coefficients", coeffs.len());
    Ok(coeffs)
}

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(Error::invalid_coefficient(token)),
    }
}

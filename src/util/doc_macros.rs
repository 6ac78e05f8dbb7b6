//! Macros for reducing doc comment boilerplate.

/// Default explanation for errors raised while reading coefficients.
macro_rules! errors_parse {
    () => {
        r"- `NoCoefficients`: the text has no tokens at all
- `InvalidCoefficient`: a token is not a finite number, the token is returned with the error
"
    };
}
pub(crate) use errors_parse;

/// Documents what happens when the iteration cap is reached.
macro_rules! note_max_iter {
    () => {
        r"Reaching `max_iter` is not an error. The best estimate so far is returned and [`Roots::converged`](crate::Roots::converged) is `false`.

"
    };
}
pub(crate) use note_max_iter;

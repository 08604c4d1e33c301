// Combinators - lift scalar operators over ordered sequences
//
// map, zip_with and reduce take an operator value and return a new function
// over slices. They are generic over the element type and over the
// operator, so any `Fn` works: a function from `ops`, a closure, or a
// method on one of the `op` enums.
//
// Every returned function allocates a fresh output. Inputs are borrowed for
// the duration of the call and never retained.
//
// The derived utilities (neg_list, add_lists, sum, prod) sit on top. sum and
// prod guard the empty and singleton cases themselves before delegating to
// reduce, which is partial.

use crate::error::Result;
use crate::ops::{add, mul, neg};

/// Higher-order map.
///
/// Returns a function that applies `f` to each element of a slice, in
/// order, producing a new vector of the same length.
pub fn map<T, U, F>(f: F) -> impl Fn(&[T]) -> Vec<U>
where
    T: Clone,
    F: Fn(T) -> U,
{
    move |ls: &[T]| ls.iter().cloned().map(&f).collect()
}

/// Higher-order map for fallible operators such as [`crate::ops::inv`].
///
/// Stops at the first element for which `f` fails and returns that error.
pub fn try_map<T, U, F>(f: F) -> impl Fn(&[T]) -> Result<Vec<U>>
where
    T: Clone,
    F: Fn(T) -> Result<U>,
{
    move |ls: &[T]| ls.iter().cloned().map(&f).collect()
}

/// Higher-order zipWith (map2).
///
/// Returns a function that applies `f(a[i], b[i])` for each index. The
/// output has the length of the shorter input; surplus elements of the
/// longer one are ignored.
pub fn zip_with<A, B, U, F>(f: F) -> impl Fn(&[A], &[B]) -> Vec<U>
where
    A: Clone,
    B: Clone,
    F: Fn(A, B) -> U,
{
    move |ls1: &[A], ls2: &[B]| {
        if ls1.len() != ls2.len() {
            log::debug!(
                "zip_with: length mismatch ({} vs {}), truncating to {}",
                ls1.len(),
                ls2.len(),
                ls1.len().min(ls2.len())
            );
        }
        ls1.iter()
            .cloned()
            .zip(ls2.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

/// Higher-order reduce.
///
/// Returns a function that left-folds a slice with `f`, starting from
/// `ls[start]` as the accumulator:
/// `f(f(f(ls[start], ls[start + 1]), ls[start + 2]), ...)`.
///
/// # Panics
/// The returned function panics if `start` is not a valid index into the
/// slice it is given (in particular, on an empty slice). Callers that may
/// see short inputs must guard before calling, as [`sum`] and [`prod`] do.
pub fn reduce<T, F>(f: F, start: usize) -> impl Fn(&[T]) -> T
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    move |ls: &[T]| {
        let init = ls[start].clone();
        ls[start + 1..].iter().cloned().fold(init, &f)
    }
}

/// Negate each element of `ls` using [`map`] and [`neg`].
pub fn neg_list(ls: &[f64]) -> Vec<f64> {
    map(neg)(ls)
}

/// Add the elements of `ls1` and `ls2` pairwise using [`zip_with`] and [`add`].
pub fn add_lists(ls1: &[f64], ls2: &[f64]) -> Vec<f64> {
    zip_with(add)(ls1, ls2)
}

/// Sum a slice using [`reduce`] and [`add`].
///
/// An empty slice sums to `0.0`.
pub fn sum(ls: &[f64]) -> f64 {
    match ls.len() {
        0 => {
            log::trace!("sum: empty input");
            0.0
        }
        1 => {
            log::trace!("sum: singleton input");
            ls[0]
        }
        _ => reduce(add, 0)(ls),
    }
}

/// Product of a slice using [`reduce`] and [`mul`].
///
/// An empty slice yields `0.0`, not the multiplicative identity.
pub fn prod(ls: &[f64]) -> f64 {
    match ls.len() {
        0 => {
            log::trace!("prod: empty input");
            0.0
        }
        1 => {
            log::trace!("prod: singleton input");
            ls[0]
        }
        _ => reduce(mul, 0)(ls),
    }
}

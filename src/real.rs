//! Scalar type selected by crate feature.

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("enable exactly one of the `f32` or `f64` features");

#[cfg(feature = "f64")]
pub type Real = f64;

#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Real = f32;

use crate::backend::Backend;
use std::marker::PhantomData;

/// Scalar operations a backend's element type must support.
///
/// Implemented for `f64`, the element type of both bundled backends.
///
/// # Example
/// ```
/// use logreg_rs::backend::ScalarOps;
///
/// assert_eq!(f64::zero(), 0.0);
/// assert_eq!(f64::one(), 1.0);
/// assert!(!f64::from_f64(f64::NAN).is_finite_value());
/// ```
pub trait ScalarOps:
    Clone
    + Copy
    + Send
    + Sync
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts an `f64` host value to this scalar type.
    fn from_f64(v: f64) -> Self;

    /// Converts this scalar to an `f64` host value.
    fn to_f64(self) -> f64;

    /// `false` for NaN and ±∞.
    fn is_finite_value(self) -> bool;
}

impl ScalarOps for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

/// Backend-typed scalar.
///
/// Wraps `B::Scalar` with a phantom backend marker so scalars produced by one backend
/// cannot be combined with another backend's tensors.
///
/// ```compile_fail
/// use logreg_rs::backend::{CpuBackend, NdarrayBackend, Scalar};
///
/// let cpu: Scalar<CpuBackend> = Scalar::new(1.0);
/// let nd: Scalar<NdarrayBackend> = Scalar::new(2.0);
/// let _ = cpu + nd; // mismatched backends
/// ```
///
/// # Example
/// ```
/// use logreg_rs::backend::{CpuBackend, Scalar};
///
/// let lr: Scalar<CpuBackend> = Scalar::new(0.5);
/// assert_eq!((lr * lr).to_f64(), 0.25);
/// ```
#[derive(Clone, Debug, Copy)]
pub struct Scalar<B: Backend> {
    pub(crate) data: B::Scalar,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Scalar<B> {
    /// Creates a scalar from an `f64` host value.
    pub fn new(f: f64) -> Self {
        Self {
            data: B::scalar_f64(f),
            backend: PhantomData,
        }
    }

    pub(crate) fn from_raw(data: B::Scalar) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Converts to an `f64` host value.
    pub fn to_f64(&self) -> f64 {
        self.data.to_f64()
    }

    pub fn is_finite(&self) -> bool {
        self.data.is_finite_value()
    }
}

impl<B: Backend> std::ops::Add for Scalar<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.data + rhs.data)
    }
}

impl<B: Backend> std::ops::Sub for Scalar<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.data - rhs.data)
    }
}

impl<B: Backend> std::ops::Mul for Scalar<B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(self.data * rhs.data)
    }
}

impl<B: Backend> std::ops::Div for Scalar<B> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_raw(self.data / rhs.data)
    }
}

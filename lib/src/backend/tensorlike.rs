use super::scalar::Scalar;
use super::tensor1d::Tensor1D;
use super::Backend;

/// Element-wise arithmetic shared by tensor types used as loss inputs.
///
/// [`crate::loss::Loss`] bounds its prediction and target types on this trait.
pub trait TensorLike<B: Backend> {
    fn sub(&self, other: &Self) -> Self;
    fn add(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
    /// Mean over every element.
    fn mean_all(&self) -> Scalar<B>;
}

impl<B: Backend> TensorLike<B> for Tensor1D<B> {
    fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    fn add(&self, other: &Self) -> Self {
        Self::from_raw(B::add_1d(&self.data, &other.data))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::from_raw(B::mul_1d(&self.data, &other.data))
    }

    fn div(&self, other: &Self) -> Self {
        Self::from_raw(B::div_1d(&self.data, &other.data))
    }

    fn mean_all(&self) -> Scalar<B> {
        self.mean()
    }
}

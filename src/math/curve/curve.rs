/// A fitted or interpolated y = f(x).
///
/// Evaluation is allowed anywhere, including outside the sample range the curve was
/// built from; forecasting future years is exactly that.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    fn values(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

/// Evaluates an inner curve at `x - origin`.
pub struct Shifted<'a, C: Curve + ?Sized> {
    inner: &'a C,
    origin: f64
}

impl<'a, C: Curve + ?Sized> Shifted<'a, C> {
    pub fn new(inner: &'a C, origin: f64) -> Shifted<'a, C> {
        Shifted { inner, origin }
    }
}

impl<C: Curve + ?Sized> Curve for Shifted<'_, C> {
    fn value(&self, x: f64) -> f64 {
        self.inner.value(x - self.origin)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.inner.derivative(x - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square;

    impl Curve for Square {
        fn value(&self, x: f64) -> f64 {
            x * x
        }

        fn derivative(&self, x: f64) -> f64 {
            2.0 * x
        }
    }

    #[test]
    fn values_maps_every_point() {
        assert_eq!(Square.values(&[1.0, 2.0, 3.0]), vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn shifted_moves_the_origin() {
        let shifted = Shifted::new(&Square, 2000.0);
        assert_eq!(shifted.value(2003.0), 9.0);
        assert_eq!(shifted.derivative(2003.0), 6.0);
    }
}

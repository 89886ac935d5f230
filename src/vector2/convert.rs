use std::fmt;

use num_complex::Complex64;

use crate::{
    error::Error,
    vector2::{Vector2, Vector2Like, frozen::FrozenVector2},
};

/// 成分を最短の往復可能な表記で書き出します。
///
/// `1e-4` 未満と `1e16` 以上は指数表記になり、指数には符号と 2 桁以上の数字が付きます。
fn component_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

impl fmt::Display for Vector2 {
    /// `Vector2` を文字列形式で表示する。
    ///
    /// 形式は `"Vector2({x}, {y})"`。整数値の成分も `1.0` のように小数点付きで表示されます。
    ///
    /// ```
    /// # use pvector::Vector2;
    /// let v = Vector2::new(1, -2.5);
    /// assert_eq!(v.to_string(), "Vector2(1.0, -2.5)");
    /// assert_eq!(Vector2::new(1e16, 1.5e-7).to_string(), "Vector2(1e+16, 1.5e-07)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector2({}, {})",
            component_repr(self.x()),
            component_repr(self.y())
        )
    }
}

impl fmt::Display for FrozenVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector2({}, {})",
            component_repr(self.x()),
            component_repr(self.y())
        )
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<FrozenVector2> for Vector2 {
    fn from(value: FrozenVector2) -> Self {
        value.to_vector2()
    }
}

impl From<&FrozenVector2> for Vector2 {
    fn from(value: &FrozenVector2) -> Self {
        value.to_vector2()
    }
}

impl From<&Vector2> for Vector2 {
    fn from(value: &Vector2) -> Self {
        *value
    }
}

impl From<Complex64> for Vector2 {
    fn from(value: Complex64) -> Self {
        Vector2::new(value.re, value.im)
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = Error;

    /// 長さ 2 のシーケンスを `x`, `y` として展開します。
    ///
    /// ```
    /// # use pvector::{Error, Vector2};
    /// let v = Vector2::try_from(&[1.0, 2.0][..]).unwrap();
    /// assert_eq!(v, Vector2::new(1.0, 2.0));
    ///
    /// let result = Vector2::try_from(&[1.0, 2.0, 3.0][..]);
    /// assert_eq!(result, Err(Error::InvalidConstruction { len: 3 }));
    /// ```
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y] => Ok(Vector2::new(*x, *y)),
            _ => {
                tracing::debug!(len = values.len(), "Vector2 built from wrong length sequence");
                Err(Error::InvalidConstruction { len: values.len() })
            }
        }
    }
}

impl TryFrom<Vec<f64>> for Vector2 {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Vector2::try_from(values.as_slice())
    }
}

//Vector2 と FrozenVector2 で共通の変換
macro_rules! impl_vector_conversions {
    ($ty:ty) => {
        impl From<$ty> for (f64, f64) {
            fn from(value: $ty) -> Self {
                value.components()
            }
        }

        impl From<$ty> for [f64; 2] {
            fn from(value: $ty) -> Self {
                [value.x(), value.y()]
            }
        }

        /// 両成分が 0 のときのみ `false`
        impl From<$ty> for bool {
            fn from(value: $ty) -> Self {
                !value.is_zero()
            }
        }

        impl From<$ty> for Complex64 {
            fn from(value: $ty) -> Self {
                value.to_complex()
            }
        }

        impl IntoIterator for $ty {
            type Item = f64;
            type IntoIter = std::array::IntoIter<f64, 2>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

impl_vector_conversions!(Vector2);
impl_vector_conversions!(FrozenVector2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(3.0, 4.0).to_string(), "Vector2(3.0, 4.0)");
        assert_eq!(Vector2::new(0.1, -7.25).to_string(), "Vector2(0.1, -7.25)");
        assert_eq!(Vector2::INFINITE.to_string(), "Vector2(inf, inf)");
        assert_eq!(
            Vector2::NEGATIVE_INFINITE.to_string(),
            "Vector2(-inf, -inf)"
        );
    }

    #[test]
    fn test_display_exponent() {
        assert_eq!(component_repr(1e16), "1e+16");
        assert_eq!(component_repr(-2.5e20), "-2.5e+20");
        assert_eq!(component_repr(1e100), "1e+100");
        assert_eq!(component_repr(1e-5), "1e-05");
        assert_eq!(component_repr(0.0001), "0.0001");
        assert_eq!(component_repr(123456789012345.0), "123456789012345.0");
        assert_eq!(component_repr(f64::NAN), "nan");
        assert_eq!(
            Vector2::new(1e16, 0.5).freeze().to_string(),
            "Vector2(1e+16, 0.5)"
        );
    }

    #[test]
    fn test_from_pair() {
        assert_eq!(Vector2::from((1.0, 2.0)), Vector2::new(1.0, 2.0));
        assert_eq!(Vector2::from([1.0, 2.0]), Vector2::new(1.0, 2.0));
        let pair: (f64, f64) = Vector2::new(5.0, 6.0).into();
        assert_eq!(pair, (5.0, 6.0));
        let array: [f64; 2] = Vector2::E.into();
        assert_eq!(array, [std::f64::consts::E; 2]);
    }

    #[test]
    fn test_from_sequence() {
        assert_eq!(
            Vector2::try_from(vec![3.0, 4.0]).unwrap(),
            Vector2::new(3.0, 4.0)
        );
        assert_eq!(
            Vector2::try_from(vec![3.0, 4.0, 5.0]),
            Err(Error::InvalidConstruction { len: 3 })
        );
        assert_eq!(
            Vector2::try_from(vec![3.0]),
            Err(Error::InvalidConstruction { len: 1 })
        );
    }

    #[test]
    fn test_copy_construction() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(Vector2::from(&v), v);

        let frozen = v.freeze();
        let mut copy = Vector2::from(&frozen);
        assert_eq!(copy, frozen);
        copy += 1.0;
        assert_eq!(copy, Vector2::new(2.0, 3.0));
    }

    #[test]
    fn test_bool() {
        assert!(bool::from(Vector2::new(0.0, 1.0)));
        assert!(bool::from(Vector2::new(-1.0, 0.0)));
        assert!(!bool::from(Vector2::new(0.0, 0.0)));
        assert!(!bool::from(Vector2::ZERO));
        assert!(bool::from(Vector2::ONE));
    }

    #[test]
    fn test_complex() {
        let c: Complex64 = Vector2::new(1.0, 2.0).into();
        assert_eq!(c, Complex64::new(1.0, 2.0));
        assert_eq!(Vector2::from(c), Vector2::new(1.0, 2.0));
        let c: Complex64 = Vector2::UP.into();
        assert_eq!(c, Complex64::i());
    }

    #[test]
    fn test_into_iter() {
        let v = Vector2::new(1.0, 2.0);
        let mut seen = Vec::new();
        for component in v {
            seen.push(component);
        }
        assert_eq!(seen, vec![1.0, 2.0]);
        // Copy なので何度でも走査できる
        assert_eq!(v.into_iter().count(), 2);

        let (x, y): (f64, f64) = Vector2::PI.into();
        assert_eq!((x, y), (std::f64::consts::PI, std::f64::consts::PI));
        assert_eq!(Vector2::PI.into_iter().collect::<Vec<_>>().len(), 2);
    }
}

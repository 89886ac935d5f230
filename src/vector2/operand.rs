use crate::{
    error::Error,
    vector2::{Vector2, Vector2Like, frozen::FrozenVector2},
};

/// 演算子の右辺（または反転した演算での左辺）として受け付ける値の形
///
/// - `Scalar` は両成分に同じ値として適用されます（ブロードキャスト）。
/// - `Pair` と `Vector` は成分ごとに適用されます。
///
/// `f64`、`f32`、`i32`、`(f64, f64)`、`[f64; 2]`、[`Vector2`]、[`FrozenVector2`] から変換できます。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Pair(f64, f64),
    Vector(Vector2),
}

impl Operand {
    /// エラーメッセージに使う型名
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Pair(..) => "pair",
            Operand::Vector(_) => "vector",
        }
    }

    /// 成分ごとの値に展開します。スカラーは両成分に複製されます。
    pub fn broadcast(self) -> (f64, f64) {
        match self {
            Operand::Scalar(s) => (s, s),
            Operand::Pair(x, y) => (x, y),
            Operand::Vector(v) => (v.x(), v.y()),
        }
    }

    /// スカラーの値を取り出します。スカラー以外は [`Error::TypeMismatch`] を返します。
    pub fn scalar(self) -> Result<f64, Error> {
        match self {
            Operand::Scalar(s) => Ok(s),
            other => {
                tracing::debug!(found = other.type_name(), "scalar operand required");
                Err(Error::TypeMismatch {
                    expected: "scalar",
                    found: other.type_name(),
                })
            }
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<[f64; 2]> for Operand {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<Vector2> for Operand {
    fn from(value: Vector2) -> Self {
        Operand::Vector(value)
    }
}

impl From<FrozenVector2> for Operand {
    fn from(value: FrozenVector2) -> Self {
        Operand::Vector(value.to_vector2())
    }
}

impl From<&Vector2> for Operand {
    fn from(value: &Vector2) -> Self {
        Operand::Vector(*value)
    }
}

impl From<&FrozenVector2> for Operand {
    fn from(value: &FrozenVector2) -> Self {
        Operand::Vector(value.to_vector2())
    }
}

impl TryFrom<&[f64]> for Operand {
    type Error = Error;

    /// 長さ 2 のスライスをペアとして受け付けます。それ以外は [`Error::InvalidOperand`] を返します。
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y] => Ok(Operand::Pair(*x, *y)),
            _ => {
                tracing::debug!(len = values.len(), "sequence operand of wrong length");
                Err(Error::InvalidOperand { len: values.len() })
            }
        }
    }
}

/// `*` 演算の結果
///
/// ベクトル同士（またはペア）の積は内積のスカラー、スカラーとの積はベクトルになります。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    Scalar(f64),
    Vector(Vector2),
}

/// 実行時まで形の決まらない値
///
/// 設定ファイルやスクリプトなど、型が静的に決まらない入力を演算に渡すための境界です。
/// [`Operand`] や [`Vector2`] への変換時に形が検査されます。
///
/// ```
/// # use pvector::{Error, Operand, Value, Vector2, Vector2Like};
/// let v = Vector2::new(1.0, 2.0);
///
/// let rhs = Operand::try_from(Value::Sequence(vec![1.0, 1.0])).unwrap();
/// assert_eq!(v.add_operand(rhs), Vector2::new(2.0, 3.0));
///
/// let rhs = Operand::try_from(Value::from("hello"));
/// assert!(matches!(rhs, Err(Error::TypeMismatch { found: "text", .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Sequence(Vec<f64>),
    Vector(Vector2),
    Text(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Vector(_) => "vector",
            Value::Text(_) => "text",
        }
    }

    /// 比較の相手として [`Vector2`] を取り出します。
    ///
    /// ベクトル以外は [`Error::TypeMismatch`] を返します。
    ///
    /// ```
    /// # use pvector::{Error, Value, Vector2};
    /// let other = Value::Number(1.0).into_vector();
    /// assert_eq!(
    ///     other,
    ///     Err(Error::TypeMismatch { expected: "vector", found: "scalar" })
    /// );
    /// ```
    pub fn into_vector(self) -> Result<Vector2, Error> {
        match self {
            Value::Vector(v) => Ok(v),
            other => {
                tracing::debug!(found = other.type_name(), "vector operand required");
                Err(Error::TypeMismatch {
                    expected: "vector",
                    found: other.type_name(),
                })
            }
        }
    }
}

impl TryFrom<Value> for Operand {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(Operand::Scalar(n)),
            Value::Sequence(values) => Operand::try_from(values.as_slice()),
            Value::Vector(v) => Ok(Operand::Vector(v)),
            Value::Text(_) => {
                tracing::debug!("text operand rejected");
                Err(Error::TypeMismatch {
                    expected: "scalar, pair or vector",
                    found: "text",
                })
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Vector2> for Value {
    fn from(value: Vector2) -> Self {
        Value::Vector(value)
    }
}

impl From<FrozenVector2> for Value {
    fn from(value: FrozenVector2) -> Self {
        Value::Vector(value.to_vector2())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast() {
        assert_eq!(Operand::from(2.0).broadcast(), (2.0, 2.0));
        assert_eq!(Operand::from((1.0, 3.0)).broadcast(), (1.0, 3.0));
        assert_eq!(Operand::from([4.0, 5.0]).broadcast(), (4.0, 5.0));
        assert_eq!(Operand::from(Vector2::UP).broadcast(), (0.0, 1.0));
    }

    #[test]
    fn test_integer_and_single_precision_scalars() {
        assert_eq!(Operand::from(2), Operand::Scalar(2.0));
        assert_eq!(Operand::from(0.5f32), Operand::Scalar(0.5));

        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v + 1, Vector2::new(2.0, 3.0));
        assert_eq!(v - 1, Vector2::new(0.0, 1.0));
        assert_eq!(v + 0.5f32, Vector2::new(1.5, 2.5));
        assert_eq!(v.div_operand(2).unwrap(), Vector2::new(0.5, 1.0));
    }

    #[test]
    fn test_slice_operand() {
        let values = [1.0, 2.0];
        assert_eq!(
            Operand::try_from(&values[..]).unwrap(),
            Operand::Pair(1.0, 2.0)
        );

        let values = [1.0, 2.0, 3.0];
        assert_eq!(
            Operand::try_from(&values[..]),
            Err(Error::InvalidOperand { len: 3 })
        );
        let empty: [f64; 0] = [];
        assert_eq!(
            Operand::try_from(&empty[..]),
            Err(Error::InvalidOperand { len: 0 })
        );
    }

    #[test]
    fn test_value_to_operand() {
        assert_eq!(
            Operand::try_from(Value::from(3.0)).unwrap(),
            Operand::Scalar(3.0)
        );
        assert_eq!(
            Operand::try_from(Value::from(Vector2::ONE)).unwrap(),
            Operand::Vector(Vector2::new(1.0, 1.0))
        );
        assert_eq!(
            Operand::try_from(Value::from(vec![1.0])),
            Err(Error::InvalidOperand { len: 1 })
        );
    }

    #[test]
    fn test_adding_text_is_type_mismatch() {
        let v = Vector2::new(1.0, 2.0);
        let result = Operand::try_from(Value::from(String::from("abc"))).map(|rhs| v + rhs);
        assert_eq!(
            result,
            Err(Error::TypeMismatch {
                expected: "scalar, pair or vector",
                found: "text"
            })
        );
    }

    #[test]
    fn test_into_vector() {
        let v = Vector2::new(1.0, 0.0);
        let other = Value::from(Vector2::new(0.0, 2.0)).into_vector().unwrap();
        assert!(v.shorter_than(&other));

        assert!(matches!(
            Value::from(vec![0.0, 2.0]).into_vector(),
            Err(Error::TypeMismatch {
                found: "sequence",
                ..
            })
        ));
        assert!(matches!(
            Value::from("v").into_vector(),
            Err(Error::TypeMismatch { found: "text", .. })
        ));
    }

    #[test]
    fn test_scalar() {
        assert_eq!(Operand::Scalar(1.5).scalar(), Ok(1.5));
        assert_eq!(
            Operand::Vector(Vector2::ONE.to_vector2()).scalar(),
            Err(Error::TypeMismatch {
                expected: "scalar",
                found: "vector"
            })
        );
    }
}

use std::cmp::Ordering;

use num_complex::Complex64;

use crate::{
    error::Error,
    vector2::{component::Component, frozen::FrozenVector2, operand::Operand, operand::Product},
};

pub mod component;
pub mod constants;
pub mod convert;
pub mod frozen;
pub mod mutable;
pub mod operand;
pub mod ops;

pub use mutable::Vector2;

/// 可変の [`Vector2`] と不変の [`FrozenVector2`] が共通して備える性質を定義するトレイト。
///
/// 成分の読み取り、長さや角度などの派生量の計算、他のベクトルとの演算はすべてここに集約されています。
/// 演算結果は常に新しい可変の [`Vector2`] として返され、`self` が変更されることはありません。
///
/// ```
/// # use pvector::{Vector2, Vector2Like};
/// let v = Vector2::new(3.0, 4.0);
/// let frozen = v.freeze();
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(frozen.magnitude(), 5.0);
/// ```
pub trait Vector2Like: Copy {
    /// x 成分を返す
    fn x(&self) -> f64;

    /// y 成分を返す
    fn y(&self) -> f64;

    /// 名前で指定した成分を更新します。
    ///
    /// 不変なベクトルに対しては常に [`Error::ImmutableMutation`] を返します。
    fn set(&mut self, component: Component, value: f64) -> Result<(), Error>;

    /// `x` の別名
    fn i(&self) -> f64 {
        self.x()
    }

    /// `y` の別名
    fn j(&self) -> f64 {
        self.y()
    }

    /// 名前で指定した成分を返します。
    ///
    /// ```
    /// # use pvector::{Component, Vector2, Vector2Like};
    /// let v = Vector2::new(0.0, 2.0);
    /// assert_eq!(v.get(Component::J), 2.0);
    /// assert_eq!(v.get(Component::Angle), std::f64::consts::FRAC_PI_2);
    /// ```
    fn get(&self, component: Component) -> f64 {
        match component {
            Component::X | Component::I => self.x(),
            Component::Y | Component::J => self.y(),
            Component::Angle => self.angle(),
        }
    }

    /// `(x, y)` のタプルとして成分を返す
    fn components(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// x 軸の正の向きからこのベクトルまでの符号付き角度（ラジアン）を返します。
    fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// ベクトルの長さの二乗
    fn magnitude_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y()
    }

    /// ベクトルの長さ
    fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// `magnitude_squared` の別名
    fn length_squared(&self) -> f64 {
        self.magnitude_squared()
    }

    /// `magnitude` の別名
    fn length(&self) -> f64 {
        self.magnitude()
    }

    /// 同じ向きで長さが 1 のベクトルを返します。
    ///
    /// 長さ 0 のベクトルに対しては成分が NaN になります。
    fn normalized(&self) -> Vector2 {
        let divisor = self.magnitude();
        Vector2::new(self.x() / divisor, self.y() / divisor)
    }

    /// 内積（dot product）
    fn dot<V: Vector2Like>(&self, other: &V) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// 二つのベクトルのなす角（ラジアン、`0..=PI`）を返します。
    ///
    /// どちらかの長さが 0 の場合は [`Error::ZeroLengthVector`] を返します。
    ///
    /// ```
    /// # use pvector::{Error, Vector2, Vector2Like};
    /// let angle = Vector2::RIGHT.angle_between(&Vector2::UP).unwrap();
    /// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    ///
    /// let result = Vector2::RIGHT.angle_between(&Vector2::ZERO);
    /// assert_eq!(result, Err(Error::ZeroLengthVector));
    /// ```
    fn angle_between<V: Vector2Like>(&self, target: &V) -> Result<f64, Error> {
        let origin_length = self.magnitude();
        let target_length = target.magnitude();
        if origin_length == 0.0 || target_length == 0.0 {
            tracing::debug!(origin_length, target_length, "angle_between on zero length vector");
            return Err(Error::ZeroLengthVector);
        }
        // 丸め誤差で acos の定義域を外れないようにする
        let cos = (self.dot(target) / (origin_length * target_length)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// 他ベクトルとの距離の二乗
    fn distance_between_squared<V: Vector2Like>(&self, other: &V) -> f64 {
        self.sub_operand(other.to_vector2()).magnitude_squared()
    }

    /// 他ベクトルとの距離
    fn distance_between<V: Vector2Like>(&self, other: &V) -> f64 {
        self.sub_operand(other.to_vector2()).magnitude()
    }

    /// 反時計回りに 90° 回転したベクトル
    fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y(), self.x())
    }

    /// `onto` への正射影ベクトルを返します。
    fn project<V: Vector2Like>(&self, onto: &V) -> Vector2 {
        let ratio = self.dot(onto) / onto.magnitude_squared();
        Vector2::new(onto.x() * ratio, onto.y() * ratio)
    }

    /// 法線 `normal` を持つ面で反射したベクトルを返します。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(1.0, -1.0);
    /// assert_eq!(v.reflect(&Vector2::UP), Vector2::new(1.0, 1.0));
    /// ```
    fn reflect<V: Vector2Like>(&self, normal: &V) -> Vector2 {
        let projected = self.project(normal);
        Vector2::new(
            self.x() - 2.0 * projected.x(),
            self.y() - 2.0 * projected.y(),
        )
    }

    /// 成分ごとの積
    fn scale<V: Vector2Like>(&self, other: &V) -> Vector2 {
        Vector2::new(self.x() * other.x(), self.y() * other.y())
    }

    /// `self` から `target` へ向かう単位ベクトル
    fn unit_vector_towards<V: Vector2Like>(&self, target: &V) -> Vector2 {
        target.sub_operand(self.to_vector2()).normalized()
    }

    /// 向きを保ったまま長さを `max_length` 以下に制限します。
    fn clamp_magnitude(&self, max_length: f64) -> Vector2 {
        let length = self.magnitude();
        if length <= max_length {
            return self.to_vector2();
        }
        let ratio = max_length / length;
        Vector2::new(self.x() * ratio, self.y() * ratio)
    }

    /// 長さの二乗を `max_length_squared` で制限します。
    ///
    /// 超過した場合は `max_length_squared / length_squared` 倍に縮めます。
    /// この倍率は長さに対して線形ではないため、結果の長さは `sqrt(max_length_squared)` と一致しません。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(4.0, 0.0);
    /// assert_eq!(v.clamp_magnitude_squared(4.0), Vector2::new(1.0, 0.0));
    /// ```
    fn clamp_magnitude_squared(&self, max_length_squared: f64) -> Vector2 {
        let length_squared = self.magnitude_squared();
        if length_squared <= max_length_squared {
            return self.to_vector2();
        }
        let ratio = max_length_squared / length_squared;
        Vector2::new(self.x() * ratio, self.y() * ratio)
    }

    /// ベクトルの角度を `min.angle()..=max.angle()` に制限します。
    ///
    /// 範囲外の場合は `min` または `max` がそのまま（長さも含めて）返されます。
    /// `max` の角度が `min` の角度より小さい場合は [`Error::InvalidRange`] を返します。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(-1.0, -1.0);
    /// let clamped = v.clamp(&Vector2::RIGHT, &Vector2::UP).unwrap();
    /// assert_eq!(clamped, Vector2::RIGHT);
    /// ```
    fn clamp<A: Vector2Like, B: Vector2Like>(&self, min: &A, max: &B) -> Result<Vector2, Error> {
        let min_angle = min.angle();
        let max_angle = max.angle();
        if max_angle < min_angle {
            tracing::debug!(min_angle, max_angle, "clamp with inverted angle range");
            return Err(Error::InvalidRange {
                min: min_angle,
                max: max_angle,
            });
        }
        let angle = self.angle();
        if angle < min_angle {
            Ok(min.to_vector2())
        } else if angle > max_angle {
            Ok(max.to_vector2())
        } else {
            Ok(self.to_vector2())
        }
    }

    /// `t` を `0..=1` に収めた線形補間
    fn lerp<V: Vector2Like>(&self, target: &V, t: f64) -> Vector2 {
        self.lerp_unclamped(target, t.clamp(0.0, 1.0))
    }

    /// `t` を制限しない線形補間
    fn lerp_unclamped<V: Vector2Like>(&self, target: &V, t: f64) -> Vector2 {
        let s = 1.0 - t;
        Vector2::new(
            self.x() * s + target.x() * t,
            self.y() * s + target.y() * t,
        )
    }

    /// 成分ごとの最小値
    fn min<V: Vector2Like>(&self, other: &V) -> Vector2 {
        Vector2::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// 成分ごとの最大値
    fn max<V: Vector2Like>(&self, other: &V) -> Vector2 {
        Vector2::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    //長さの二乗による大小比較
    //完全一致による `==` と整合しないため PartialOrd は実装していない
    fn cmp_magnitude<V: Vector2Like>(&self, other: &V) -> Option<Ordering> {
        self.magnitude_squared()
            .partial_cmp(&other.magnitude_squared())
    }

    /// `self < other`
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// assert!(Vector2::new(1.0, 0.0).shorter_than(&Vector2::new(0.0, 2.0)));
    /// ```
    fn shorter_than<V: Vector2Like>(&self, other: &V) -> bool {
        self.magnitude_squared() < other.magnitude_squared()
    }

    /// `self <= other`
    fn shorter_or_equal<V: Vector2Like>(&self, other: &V) -> bool {
        self.magnitude_squared() <= other.magnitude_squared()
    }

    /// `self > other`
    fn longer_than<V: Vector2Like>(&self, other: &V) -> bool {
        self.magnitude_squared() > other.magnitude_squared()
    }

    /// `self >= other`
    fn longer_or_equal<V: Vector2Like>(&self, other: &V) -> bool {
        self.magnitude_squared() >= other.magnitude_squared()
    }

    /// ベクトル、スカラー、ペアとの加算
    fn add_operand(&self, rhs: impl Into<Operand>) -> Vector2 {
        let (x, y) = rhs.into().broadcast();
        Vector2::new(self.x() + x, self.y() + y)
    }

    /// ベクトル、スカラー、ペアとの減算（`self - rhs`）
    fn sub_operand(&self, rhs: impl Into<Operand>) -> Vector2 {
        let (x, y) = rhs.into().broadcast();
        Vector2::new(self.x() - x, self.y() - y)
    }

    /// 左右を入れ替えた減算（`lhs - self`）
    fn rsub_operand(&self, lhs: impl Into<Operand>) -> Vector2 {
        let (x, y) = lhs.into().broadcast();
        Vector2::new(x - self.x(), y - self.y())
    }

    /// 乗算
    ///
    /// 相手がベクトルまたはペアなら内積（スカラー）、スカラーならスカラー倍（ベクトル）を返します。
    ///
    /// ```
    /// # use pvector::{Product, Vector2, Vector2Like};
    /// let v = Vector2::new(1.0, 2.0);
    /// assert_eq!(v.mul_operand((3.0, 4.0)), Product::Scalar(11.0));
    /// assert_eq!(v.mul_operand(2.0), Product::Vector(Vector2::new(2.0, 4.0)));
    /// ```
    fn mul_operand(&self, rhs: impl Into<Operand>) -> Product {
        match rhs.into() {
            Operand::Scalar(s) => Product::Vector(Vector2::new(self.x() * s, self.y() * s)),
            Operand::Pair(x, y) => Product::Scalar(self.x() * x + self.y() * y),
            Operand::Vector(v) => Product::Scalar(self.dot(&v)),
        }
    }

    /// スカラーによる除算。スカラー以外は [`Error::TypeMismatch`] を返します。
    fn div_operand(&self, rhs: impl Into<Operand>) -> Result<Vector2, Error> {
        let divisor = rhs.into().scalar()?;
        Ok(Vector2::new(self.x() / divisor, self.y() / divisor))
    }

    /// スカラーによる切り捨て除算。スカラー以外は [`Error::TypeMismatch`] を返します。
    fn floor_div_operand(&self, rhs: impl Into<Operand>) -> Result<Vector2, Error> {
        Ok(self.floor_div(rhs.into().scalar()?))
    }

    /// スカラーによる累乗。スカラー以外は [`Error::TypeMismatch`] を返します。
    fn pow_operand(&self, rhs: impl Into<Operand>) -> Result<Vector2, Error> {
        Ok(self.powf(rhs.into().scalar()?))
    }

    /// 成分ごとの切り捨て除算
    ///
    /// 商は剰余 `x - q * divisor` が `divisor` と同じ符号になるように決まります。
    /// 除数が 0 の場合は通常の除算と同じく無限大や NaN になります。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(1.0, -1.0);
    /// assert_eq!(v.floor_div(0.1), Vector2::new(9.0, -10.0));
    /// ```
    fn floor_div(&self, divisor: f64) -> Vector2 {
        Vector2::new(
            floor_div_component(self.x(), divisor),
            floor_div_component(self.y(), divisor),
        )
    }

    /// 成分ごとの累乗
    fn powf(&self, exponent: f64) -> Vector2 {
        Vector2::new(self.x().powf(exponent), self.y().powf(exponent))
    }

    /// 成分ごとの絶対値
    fn abs(&self) -> Vector2 {
        Vector2::new(self.x().abs(), self.y().abs())
    }

    /// 各成分を小数点以下 `digits` 桁に丸めます。
    ///
    /// 浮動小数点数が表す正確な 10 進の値を基準に丸め、ちょうど中間の場合は偶数側に寄せます。
    /// `digits` が負の場合は 10 の位、100 の位… で丸めます。
    ///
    /// # 範囲外の桁数
    /// - `digits` が 323 より大きい場合は丸める桁が存在しないため元の値を返します。
    /// - `digits` が -308 より小さい場合は符号付きの 0 を返します。
    /// - 丸めた結果が `f64` で表現できない場合は元の値を返します。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(1.2345, 2.6789);
    /// assert_eq!(v.round(2), Vector2::new(1.23, 2.68));
    ///
    /// // 2.675 は 2.67499999... として保持されている
    /// assert_eq!(Vector2::new(2.675, 1250.4).round(2).x(), 2.67);
    /// assert_eq!(Vector2::new(2.675, 1250.4).round(-2).y(), 1300.0);
    /// ```
    fn round(&self, digits: i32) -> Vector2 {
        Vector2::new(
            round_to_digits(self.x(), digits),
            round_to_digits(self.y(), digits),
        )
    }

    /// 桁数を実数で受け取る [`Vector2Like::round`]。
    ///
    /// 整数でない桁数は [`Error::InvalidArgument`] を返します。
    fn try_round(&self, digits: f64) -> Result<Vector2, Error> {
        if !digits.is_finite()
            || digits.fract() != 0.0
            || digits < i32::MIN as f64
            || digits > i32::MAX as f64
        {
            tracing::debug!(digits, "round with non-integer precision");
            return Err(Error::InvalidArgument { digits });
        }
        Ok(self.round(digits as i32))
    }

    /// 成分ごとの 0 方向への切り捨て
    fn trunc(&self) -> Vector2 {
        Vector2::new(self.x().trunc(), self.y().trunc())
    }

    fn floor(&self) -> Vector2 {
        Vector2::new(self.x().floor(), self.y().floor())
    }

    fn ceil(&self) -> Vector2 {
        Vector2::new(self.x().ceil(), self.y().ceil())
    }

    /// 両成分がちょうど 0 かどうか
    fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }

    /// `x`, `y` の順に成分を返すイテレータ。呼び出すたびに新しいイテレータが作られます。
    fn iter(&self) -> std::array::IntoIter<f64, 2> {
        [self.x(), self.y()].into_iter()
    }

    /// `x + y·i` の複素数へ変換
    fn to_complex(&self) -> Complex64 {
        Complex64::new(self.x(), self.y())
    }

    /// 同じ成分を持つ新しい可変ベクトルを返します。元のベクトルの可変性には依存しません。
    fn to_vector2(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// 同じ成分を持つ新しい不変ベクトルを返します。元のベクトルには影響しません。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let mut v = Vector2::new(1.0, 2.0);
    /// let frozen = v.freeze();
    /// v.set_x(5.0);
    /// assert_eq!(frozen.x(), 1.0);
    /// ```
    fn freeze(&self) -> FrozenVector2 {
        FrozenVector2::from_parts(self.x(), self.y())
    }
}

//これより細かい桁は f64 に存在しない
const MAX_ROUND_DIGITS: i32 = 323;
//これより粗い桁では常に 0 になる
const MIN_ROUND_DIGITS: i32 = -308;

fn round_to_digits(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || value == 0.0 || digits > MAX_ROUND_DIGITS {
        return value;
    }
    if digits < MIN_ROUND_DIGITS {
        return 0.0f64.copysign(value);
    }
    //固定小数点の書式化は正確な 10 進展開を偶数丸めする
    let rounded = if digits >= 0 {
        format!("{:.*}", digits as usize, value)
            .parse::<f64>()
            .unwrap_or(value)
            .copysign(value)
    } else {
        round_integer_places(value.abs(), digits.unsigned_abs() as usize).copysign(value)
    };
    if rounded.is_finite() {
        rounded
    } else {
        tracing::debug!(value, digits, "rounded value is out of range");
        value
    }
}

/// 非負の `magnitude` を `10^places` の倍数に丸めます。
///
/// 整数部の正確な 10 進表記を桁ごとに見て丸めるため、途中で誤差が入りません。
fn round_integer_places(magnitude: f64, places: usize) -> f64 {
    let integer = format!("{:.0}", magnitude.trunc());
    let has_fraction = magnitude.fract() != 0.0;

    let (head, tail) = integer.split_at(integer.len().saturating_sub(places));
    let round_up = if integer.len() < places {
        false
    } else {
        let mut rest = tail.bytes();
        match rest.next() {
            Some(b'5') => {
                let above_half = rest.any(|digit| digit != b'0') || has_fraction;
                let odd = head.bytes().last().is_some_and(|digit| digit % 2 == 1);
                above_half || odd
            }
            Some(digit) => digit > b'5',
            None => false,
        }
    };

    let mut quotient: Vec<u8> = head.bytes().collect();
    if round_up {
        let mut carry = true;
        for digit in quotient.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            quotient.insert(0, b'1');
        }
    }
    if quotient.is_empty() {
        return 0.0;
    }
    let quotient: String = quotient.into_iter().map(char::from).collect();
    format!("{quotient}e{places}")
        .parse::<f64>()
        .unwrap_or(magnitude)
}

//剰余が除数と同じ符号になる切り捨て除算
fn floor_div_component(value: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return (value / divisor).floor();
    }
    let remainder = value % divisor;
    let mut quotient = (value - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0f64.copysign(value / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

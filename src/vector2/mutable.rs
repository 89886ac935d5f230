use std::f64::consts::PI;

#[cfg(any(test))]
use proptest::prelude::*;

use crate::{
    error::Error,
    vector2::{Vector2Like, component::Component},
};
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(any(test, feature = "random"))]
use std::ops::RangeInclusive;

/// 2次元のベクトル型（可変）
///
/// 各成分は `f64` で保持され、代入時には常に `f64` へ変換されます。
/// 成分の読み取りや演算は [`Vector2Like`] トレイトで提供され、不変な [`FrozenVector2`] と共通です。
///
/// 複数のスレッドから同じインスタンスを書き換える場合の同期は呼び出し側の責任です。
///
/// # 大小比較
/// `==` は成分の完全一致で判定されるため、長さによる大小比較は `PartialOrd` ではなく
/// 次のメソッドで行います。
///
/// | 演算 | メソッド |
/// |---|---|
/// | `<` | [`shorter_than`](Vector2Like::shorter_than) |
/// | `<=` | [`shorter_or_equal`](Vector2Like::shorter_or_equal) |
/// | `>` | [`longer_than`](Vector2Like::longer_than) |
/// | `>=` | [`longer_or_equal`](Vector2Like::longer_or_equal) |
///
/// [`cmp_magnitude`](Vector2Like::cmp_magnitude) は `Ordering` を返します。
///
/// ```
/// pub struct Vector2 {
///     x: f64,
///     y: f64,
/// }
/// ```
///
/// [`FrozenVector2`]: crate::FrozenVector2
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// `x` と `y` を指定して [`Vector2`] を作成します。
    ///
    /// 整数などの数値も `f64` に変換されます。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let v = Vector2::new(3, 4.5);
    /// assert_eq!(v.x(), 3.0);
    /// assert_eq!(v.y(), 4.5);
    /// ```
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// `value` を `x` と `y` の両方に設定した [`Vector2`] を作成します。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// assert_eq!(Vector2::splat(2), Vector2::new(2.0, 2.0));
    /// ```
    pub fn splat(value: impl Into<f64>) -> Self {
        let value = value.into();
        Self { x: value, y: value }
    }

    /// x 成分を更新
    pub fn set_x(&mut self, value: impl Into<f64>) {
        self.x = value.into();
    }

    /// y 成分を更新
    pub fn set_y(&mut self, value: impl Into<f64>) {
        self.y = value.into();
    }

    /// `set_x` の別名
    pub fn set_i(&mut self, value: impl Into<f64>) {
        self.set_x(value);
    }

    /// `set_y` の別名
    pub fn set_j(&mut self, value: impl Into<f64>) {
        self.set_y(value);
    }

    /// 長さを保ったままベクトルの向きを `angle`（ラジアン）に変更します。
    ///
    /// # バリデーション
    /// - `angle` が `-PI..PI` の範囲外の場合、[`Error::InvalidAngle`] を返し、ベクトルは変更されません。
    ///
    /// 長さ 0 のベクトルは長さ 0 のままです。
    ///
    /// ```
    /// # use pvector::{Vector2, Vector2Like};
    /// let mut v = Vector2::new(2.0, 0.0);
    /// v.set_angle(std::f64::consts::FRAC_PI_2).unwrap();
    /// assert!((v.x() - 0.0).abs() < 1e-12);
    /// assert!((v.y() - 2.0).abs() < 1e-12);
    /// ```
    ///
    /// 範囲外の検知:
    /// ```
    /// # use pvector::{Error, Vector2};
    /// let mut v = Vector2::new(2.0, 0.0);
    /// let result = v.set_angle(std::f64::consts::PI);
    /// assert!(matches!(result, Err(Error::InvalidAngle { .. })));
    /// ```
    pub fn set_angle(&mut self, angle: f64) -> Result<(), Error> {
        if !(-PI..PI).contains(&angle) {
            tracing::debug!(angle, "rejected angle outside -PI..PI");
            return Err(Error::InvalidAngle { angle });
        }
        let length = self.magnitude();
        self.x = length * angle.cos();
        self.y = length * angle.sin();
        Ok(())
    }

    /// 全成分を `-1.0..=1.0` の範囲からランダムに選んだ [`Vector2`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        Self::random_within(-1.0..=1.0)
    }

    /// 指定された範囲内でランダムな [`Vector2`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within(range: RangeInclusive<f64>) -> Self {
        let mut rng = rand::rng();
        Self::random_within_using(&mut rng, range)
    }

    /// 外部の乱数生成器を使用してランダムな [`Vector2`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_within_using<R: Rng>(rng: &mut R, range: RangeInclusive<f64>) -> Self {
        let (start, end) = (*range.start(), *range.end());
        let (low, high) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        Self::new(rng.random_range(low..=high), rng.random_range(low..=high))
    }

    /// 外部の乱数生成器を使用してランダムな向きの単位ベクトルを生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_unit_using<R: Rng>(rng: &mut R) -> Self {
        let angle = rng.random_range(-PI..PI);
        Self::new(angle.cos(), angle.sin())
    }

    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self> {
        Self::arb_within(-1.0e6..=1.0e6)
    }

    #[cfg(any(test))]
    pub fn arb_within(range: RangeInclusive<f64>) -> impl Strategy<Value = Self> {
        (range.clone(), range).prop_map(|(x, y)| Vector2::new(x, y))
    }
}

impl Vector2Like for Vector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    /// 名前で指定した成分を更新します。`Component::Angle` は [`Vector2::set_angle`] と同じ検証を行います。
    fn set(&mut self, component: Component, value: f64) -> Result<(), Error> {
        match component {
            Component::X | Component::I => self.set_x(value),
            Component::Y | Component::J => self.set_y(value),
            Component::Angle => self.set_angle(value)?,
        }
        Ok(())
    }
}

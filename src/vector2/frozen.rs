use crate::{
    error::Error,
    vector2::{Vector2Like, component::Component},
};

/// 成分を変更できない2次元のベクトル型
///
/// [`Vector2Like::freeze`] でのみ作成でき、元のベクトルとは独立した値を保持します。
/// 読み取りと演算は [`Vector2`](crate::Vector2) と全く同じように振る舞いますが、成分を書き換えるメソッドを持ちません。
/// 名前による書き換え [`Vector2Like::set`] は [`Error::ImmutableMutation`] を返します。
///
/// ```
/// # use pvector::{Component, Error, Vector2, Vector2Like};
/// let mut frozen = Vector2::new(1.0, 2.0).freeze();
/// assert_eq!(frozen.x(), 1.0);
/// assert_eq!(frozen.set(Component::X, 5.0), Err(Error::ImmutableMutation));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrozenVector2 {
    x: f64,
    y: f64,
}

impl FrozenVector2 {
    pub(crate) const fn from_parts(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector2Like for FrozenVector2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set(&mut self, component: Component, value: f64) -> Result<(), Error> {
        tracing::debug!(?component, value, "write to frozen vector rejected");
        Err(Error::ImmutableMutation)
    }
}

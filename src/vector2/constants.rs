use std::f64::consts;

use crate::vector2::{Vector2, frozen::FrozenVector2};

/// 代表的なベクトルの定数。すべて不変な [`FrozenVector2`] です。
///
/// ```
/// # use pvector::{Vector2, Vector2Like};
/// assert_eq!(Vector2::UP + Vector2::DOWN, Vector2::ZERO);
/// assert_eq!(Vector2::RIGHT.perpendicular(), Vector2::UP);
/// ```
impl Vector2 {
    /// `(0, 0)`
    pub const ZERO: FrozenVector2 = FrozenVector2::from_parts(0.0, 0.0);
    /// `(1, 1)`
    pub const ONE: FrozenVector2 = FrozenVector2::from_parts(1.0, 1.0);
    /// `(0, 1)`
    pub const UP: FrozenVector2 = FrozenVector2::from_parts(0.0, 1.0);
    /// `(0, -1)`
    pub const DOWN: FrozenVector2 = FrozenVector2::from_parts(0.0, -1.0);
    /// `(-1, 0)`
    pub const LEFT: FrozenVector2 = FrozenVector2::from_parts(-1.0, 0.0);
    /// `(1, 0)`
    pub const RIGHT: FrozenVector2 = FrozenVector2::from_parts(1.0, 0.0);
    /// `(-inf, -inf)`
    pub const NEGATIVE_INFINITE: FrozenVector2 =
        FrozenVector2::from_parts(f64::NEG_INFINITY, f64::NEG_INFINITY);
    /// `(inf, inf)`
    pub const INFINITE: FrozenVector2 = FrozenVector2::from_parts(f64::INFINITY, f64::INFINITY);
    /// `(e, e)`
    pub const E: FrozenVector2 = FrozenVector2::from_parts(consts::E, consts::E);
    /// `(π, π)`
    pub const PI: FrozenVector2 = FrozenVector2::from_parts(consts::PI, consts::PI);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Component, Error, Vector2Like};

    #[test]
    fn test_constant_values() {
        assert_eq!(Vector2::ZERO, Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::ONE, Vector2::new(1.0, 1.0));
        assert_eq!(Vector2::UP, Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::DOWN, Vector2::new(0.0, -1.0));
        assert_eq!(Vector2::LEFT, Vector2::new(-1.0, 0.0));
        assert_eq!(Vector2::RIGHT, Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::E.x(), consts::E);
        assert_eq!(Vector2::PI.y(), consts::PI);
        assert!(Vector2::INFINITE.x().is_infinite() && Vector2::INFINITE.x() > 0.0);
        assert!(Vector2::NEGATIVE_INFINITE.y().is_infinite() && Vector2::NEGATIVE_INFINITE.y() < 0.0);
    }

    #[test]
    fn test_constants_are_frozen() {
        let mut up = Vector2::UP;
        assert_eq!(up.set(Component::Y, 3.0), Err(Error::ImmutableMutation));
        assert_eq!(Vector2::UP, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_constants_are_shared_across_threads() {
        let handle = std::thread::spawn(|| Vector2::RIGHT.magnitude());
        assert_eq!(handle.join().unwrap(), 1.0);
    }
}

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 角度の単位変換。
mod angle;

/// 2次元ベクトル型とその演算を定義。
mod vector2;

pub use num_complex::Complex64;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use error::Error;
pub use vector2::{
    Vector2, Vector2Like,
    component::Component,
    frozen::FrozenVector2,
    operand::{Operand, Product, Value},
};

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::vector2::{Vector2, Vector2Like, frozen::FrozenVector2, operand::Operand};

//可変・不変の両方に共通する演算子
//結果は常に新しい可変の Vector2
macro_rules! impl_vector_ops {
    ($ty:ty) => {
        impl<T: Into<Operand>> Add<T> for $ty {
            type Output = Vector2;
            fn add(self, rhs: T) -> Vector2 {
                self.add_operand(rhs)
            }
        }

        impl<T: Into<Operand>> Sub<T> for $ty {
            type Output = Vector2;
            fn sub(self, rhs: T) -> Vector2 {
                self.sub_operand(rhs)
            }
        }

        /// スカラー倍
        impl Mul<f64> for $ty {
            type Output = Vector2;
            fn mul(self, rhs: f64) -> Vector2 {
                Vector2::new(self.x() * rhs, self.y() * rhs)
            }
        }

        /// 内積
        impl Mul<Vector2> for $ty {
            type Output = f64;
            fn mul(self, rhs: Vector2) -> f64 {
                self.dot(&rhs)
            }
        }

        /// 内積
        impl Mul<FrozenVector2> for $ty {
            type Output = f64;
            fn mul(self, rhs: FrozenVector2) -> f64 {
                self.dot(&rhs)
            }
        }

        /// ペアとの内積
        impl Mul<(f64, f64)> for $ty {
            type Output = f64;
            fn mul(self, (x, y): (f64, f64)) -> f64 {
                self.x() * x + self.y() * y
            }
        }

        /// ペアとの内積
        impl Mul<[f64; 2]> for $ty {
            type Output = f64;
            fn mul(self, [x, y]: [f64; 2]) -> f64 {
                self.x() * x + self.y() * y
            }
        }

        impl Mul<i32> for $ty {
            type Output = Vector2;
            fn mul(self, rhs: i32) -> Vector2 {
                self * f64::from(rhs)
            }
        }

        impl Div<i32> for $ty {
            type Output = Vector2;
            fn div(self, rhs: i32) -> Vector2 {
                self / f64::from(rhs)
            }
        }

        impl Div<f64> for $ty {
            type Output = Vector2;
            fn div(self, rhs: f64) -> Vector2 {
                Vector2::new(self.x() / rhs, self.y() / rhs)
            }
        }

        impl Neg for $ty {
            type Output = Vector2;
            fn neg(self) -> Vector2 {
                Vector2::new(-self.x(), -self.y())
            }
        }

        impl Add<$ty> for f64 {
            type Output = Vector2;
            fn add(self, rhs: $ty) -> Vector2 {
                rhs.add_operand(self)
            }
        }

        impl Sub<$ty> for f64 {
            type Output = Vector2;
            fn sub(self, rhs: $ty) -> Vector2 {
                rhs.rsub_operand(self)
            }
        }

        impl Mul<$ty> for f64 {
            type Output = Vector2;
            fn mul(self, rhs: $ty) -> Vector2 {
                rhs * self
            }
        }

        impl Mul<$ty> for i32 {
            type Output = Vector2;
            fn mul(self, rhs: $ty) -> Vector2 {
                rhs * f64::from(self)
            }
        }

        impl Add<$ty> for (f64, f64) {
            type Output = Vector2;
            fn add(self, rhs: $ty) -> Vector2 {
                rhs.add_operand(self)
            }
        }

        impl Sub<$ty> for (f64, f64) {
            type Output = Vector2;
            fn sub(self, rhs: $ty) -> Vector2 {
                rhs.rsub_operand(self)
            }
        }

        impl Mul<$ty> for (f64, f64) {
            type Output = f64;
            fn mul(self, rhs: $ty) -> f64 {
                rhs * self
            }
        }

        impl Add<$ty> for [f64; 2] {
            type Output = Vector2;
            fn add(self, rhs: $ty) -> Vector2 {
                rhs.add_operand(self)
            }
        }

        impl Sub<$ty> for [f64; 2] {
            type Output = Vector2;
            fn sub(self, rhs: $ty) -> Vector2 {
                rhs.rsub_operand(self)
            }
        }

        impl Mul<$ty> for [f64; 2] {
            type Output = f64;
            fn mul(self, rhs: $ty) -> f64 {
                rhs * self
            }
        }
    };
}

impl_vector_ops!(Vector2);
impl_vector_ops!(FrozenVector2);

// 複合代入は可変のベクトルのみ
impl<T: Into<Operand>> AddAssign<T> for Vector2 {
    fn add_assign(&mut self, rhs: T) {
        *self = self.add_operand(rhs);
    }
}

impl<T: Into<Operand>> SubAssign<T> for Vector2 {
    fn sub_assign(&mut self, rhs: T) {
        *self = self.sub_operand(rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl PartialEq<FrozenVector2> for Vector2 {
    fn eq(&self, other: &FrozenVector2) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl PartialEq<Vector2> for FrozenVector2 {
    fn eq(&self, other: &Vector2) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

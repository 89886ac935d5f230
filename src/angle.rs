use std::f64::consts::PI;

/// 度数法の角度をラジアンに変換します。
///
/// ```
/// # use pvector::degrees_to_radians;
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// ラジアンを度数法の角度に変換します。
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_eq!(degrees_to_radians(90.0), PI / 2.0);
        assert_eq!(degrees_to_radians(-180.0), -PI);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(radians_to_degrees(PI / 4.0), 45.0);
    }

    proptest! {
        #[test]
        fn random_test_roundtrip(degrees in -720.0f64..720.0) {
            let back = radians_to_degrees(degrees_to_radians(degrees));
            prop_assert!((back - degrees).abs() < 1e-9);
        }
    }
}

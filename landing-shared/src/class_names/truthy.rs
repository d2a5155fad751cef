use std::borrow::Cow;

/// Permissive boolean coercion used for class conditions.
///
/// Empty text, zero (including `-0.0`), `NaN`, `None` and `false` are falsy.
/// Everything else is truthy, including empty sequences and maps.
pub trait Truthy {
    /// Returns `true` when the value should contribute a class.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Cow<'_, str> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !self.is_nan() && *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        !self.is_nan() && *self != 0.0
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Self::String(text) => text.is_truthy(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Truthy;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), false ; "null")]
    #[test_case(json!(false), false ; "false")]
    #[test_case(json!(true), true ; "true")]
    #[test_case(json!(0), false ; "zero")]
    #[test_case(json!(-0.0), false ; "negative zero")]
    #[test_case(json!(2.5), true ; "fraction")]
    #[test_case(json!(""), false ; "empty string")]
    #[test_case(json!("x"), true ; "string")]
    #[test_case(json!([]), true ; "empty array")]
    #[test_case(json!({}), true ; "empty object")]
    fn json_truthiness(value: serde_json::Value, expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_float_nan_is_falsy() {
        assert!(!f64::NAN.is_truthy());
        assert!(!f32::NAN.is_truthy());
        assert!(f64::INFINITY.is_truthy());
    }

    #[test]
    fn test_option_and_references() {
        assert!(!None::<bool>.is_truthy());
        assert!(Some(1_u8).is_truthy());
        assert!(!Some("").is_truthy());
        assert!((&&"name").is_truthy());
    }
}

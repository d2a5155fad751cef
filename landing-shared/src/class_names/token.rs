use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use super::map::ClassMap;
use super::truthy::Truthy;

/// Custom text conversion for values passed to the composer.
///
/// A [`ClassToken::Custom`] is rendered through this trait and its keys are
/// never scanned.
pub trait Stringable: Send + Sync {
    fn to_class_string(&self) -> String;
}

/// A single argument accepted by [`compose`](super::compose).
///
/// Every conversion classifies its input once; the composer then dispatches on
/// the variant alone.
#[derive(Clone, Default)]
pub enum ClassToken {
    /// Null, `false`, `true` and any input kind the composer ignores.
    #[default]
    Absent,
    Text(String),
    Integer(i64),
    Float(f64),
    Sequence(Vec<ClassToken>),
    Map(ClassMap),
    Custom(Arc<dyn Stringable>),
}

impl ClassToken {
    /// Wraps a [`Stringable`] value.
    pub fn custom(value: impl Stringable + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Builds a sequence token from any iterable of convertible values.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ClassToken>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl Truthy for ClassToken {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Text(text) => text.is_truthy(),
            Self::Integer(value) => value.is_truthy(),
            Self::Float(value) => value.is_truthy(),
            Self::Sequence(_) | Self::Map(_) | Self::Custom(_) => true,
        }
    }
}

impl fmt::Debug for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Custom(value) => f
                .debug_tuple("Custom")
                .field(&value.to_class_string())
                .finish(),
        }
    }
}

/// Renders a float the way a browser prints numbers into class strings.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6) {
        // Exponent form: `1e+21`, `2.5e-7`. Positive exponents carry a sign.
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    // Display already drops the fractional part of integral values (`3.0` -> `3`).
    value.to_string()
}

impl From<&str> for ClassToken {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for ClassToken {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for ClassToken {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Cow<'_, str>> for ClassToken {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

/// Booleans never name a class on their own.
impl From<bool> for ClassToken {
    fn from(_: bool) -> Self {
        Self::Absent
    }
}

impl From<()> for ClassToken {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClassToken {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClassToken {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => Self::Integer(value),
                        Err(_) => Self::Text(value.to_string()),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(i128, isize, u64, u128, usize);

impl From<f32> for ClassToken {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ClassToken {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<ClassToken>> From<Option<T>> for ClassToken {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<ClassToken>> From<Vec<T>> for ClassToken {
    fn from(items: Vec<T>) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<ClassToken>, const N: usize> From<[T; N]> for ClassToken {
    fn from(items: [T; N]) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<ClassToken> + Clone> From<&[T]> for ClassToken {
    fn from(items: &[T]) -> Self {
        Self::sequence(items.iter().cloned())
    }
}

impl From<ClassMap> for ClassToken {
    fn from(map: ClassMap) -> Self {
        Self::Map(map)
    }
}

impl From<Arc<dyn Stringable>> for ClassToken {
    fn from(value: Arc<dyn Stringable>) -> Self {
        Self::Custom(value)
    }
}

impl From<serde_json::Value> for ClassToken {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null | Value::Bool(_) => Self::Absent,
            Value::String(text) => Self::Text(text),
            Value::Number(number) => match number.as_i64() {
                Some(value) => Self::Integer(value),
                None => number.as_f64().map_or(Self::Absent, Self::Float),
            },
            Value::Array(items) => Self::sequence(items),
            Value::Object(object) => Self::Map(ClassMap::from(object)),
        }
    }
}

impl<'de> Deserialize<'de> for ClassToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed;

    impl Stringable for Fixed {
        fn to_class_string(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn test_booleans_are_absent() {
        assert!(matches!(ClassToken::from(true), ClassToken::Absent));
        assert!(matches!(ClassToken::from(false), ClassToken::Absent));
        assert!(matches!(ClassToken::from(None::<&str>), ClassToken::Absent));
    }

    #[test]
    fn test_numbers_classify_by_width() {
        assert!(matches!(ClassToken::from(7_u8), ClassToken::Integer(7)));
        assert!(matches!(ClassToken::from(u64::MAX), ClassToken::Text(ref text) if text == "18446744073709551615"));
        assert!(matches!(ClassToken::from(1.5_f32), ClassToken::Float(value) if (value - 1.5).abs() < f64::EPSILON));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_float_switches_to_exponent_form() {
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(1.5e22), "1.5e+22");
        assert_eq!(format_float(-1e21), "-1e+21");
        assert_eq!(format_float(1e-7), "1e-7");
        assert_eq!(format_float(2.5e-8), "2.5e-8");
    }

    #[test]
    fn test_format_float_keeps_plain_digits_inside_range() {
        assert_eq!(format_float(1e20), "100000000000000000000");
        assert_eq!(format_float(0.000_001), "0.000001");
    }

    #[test]
    fn test_json_classification() {
        let token = ClassToken::from(json!(["a", 2, 2.5, null, {"b": true}]));
        let ClassToken::Sequence(items) = token else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 5);
        assert!(matches!(items[0], ClassToken::Text(_)));
        assert!(matches!(items[1], ClassToken::Integer(2)));
        assert!(matches!(items[2], ClassToken::Float(_)));
        assert!(matches!(items[3], ClassToken::Absent));
        assert!(matches!(items[4], ClassToken::Map(_)));
    }

    #[test]
    fn test_custom_debug_shows_rendered_text() {
        let token = ClassToken::custom(Fixed);
        assert_eq!(format!("{token:?}"), "Custom(\"fixed\")");
        assert!(token.is_truthy());
    }

    #[test]
    fn test_empty_containers_are_truthy() {
        assert!(ClassToken::Sequence(Vec::new()).is_truthy());
        assert!(ClassToken::Map(ClassMap::new()).is_truthy());
        assert!(!ClassToken::Text(String::new()).is_truthy());
    }
}

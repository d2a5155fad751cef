//! # Class name composition
//!
//! Joins conditional CSS class names into a single attribute value.
//!
//! Arguments are converted into [`ClassToken`]s and processed left to right:
//! falsy values are skipped, text and numbers are appended as-is, sequences
//! are composed recursively into one token and maps contribute every key whose
//! condition holds. Nothing here can fail; inputs that cannot name a class are
//! ignored.
//!
//! ```
//! use shared::{class_list, class_map, class_names};
//!
//! let classes = class_names!(
//!     "a",
//!     class_list!["b", class_map! { "c" => true, "d" => false }],
//!     "e",
//! );
//! assert_eq!(classes, "a b c e");
//! ```

mod map;
mod token;
mod truthy;

pub use map::ClassMap;
pub use token::{ClassToken, Stringable};
pub use truthy::Truthy;

use token::format_float;

/// Composes class tokens into a space-separated class string.
///
/// # Arguments
/// * `args` - Values convertible into [`ClassToken`], in output order.
///
/// # Returns
/// The collected class names joined by single spaces, or an empty string when
/// nothing was collected.
pub fn compose<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassToken>,
{
    let mut classes = Vec::new();
    for arg in args {
        push_token(&mut classes, arg.into());
    }
    classes.join(" ")
}

fn push_token(classes: &mut Vec<String>, token: ClassToken) {
    if !token.is_truthy() {
        return;
    }

    match token {
        ClassToken::Absent => {}
        ClassToken::Text(text) => classes.push(text),
        ClassToken::Integer(value) => classes.push(value.to_string()),
        ClassToken::Float(value) => classes.push(format_float(value)),
        ClassToken::Sequence(items) => {
            // A nested sequence collapses into a single token.
            if !items.is_empty() {
                let nested = compose(items);
                if !nested.is_empty() {
                    classes.push(nested);
                }
            }
        }
        ClassToken::Custom(value) => classes.push(value.to_class_string()),
        ClassToken::Map(map) => classes.extend(map.enabled_keys().map(str::to_string)),
    }
}

/// Composes heterogeneous arguments into a class string.
///
/// Each argument may be any type with an `Into<ClassToken>` conversion.
#[macro_export]
macro_rules! class_names {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::class_names::compose([
            $($crate::class_names::ClassToken::from($arg)),+
        ])
    };
}

/// Builds a [`ClassToken::Sequence`] from heterogeneous elements.
#[macro_export]
macro_rules! class_list {
    ($($item:expr),* $(,)?) => {
        $crate::class_names::ClassToken::Sequence(::std::vec![
            $($crate::class_names::ClassToken::from($item)),*
        ])
    };
}

/// Builds a [`ClassMap`] from `key => condition` pairs, keeping their order.
#[macro_export]
macro_rules! class_map {
    ($($key:expr => $condition:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::class_names::ClassMap::new();
        $(map.insert($key, $condition);)*
        map
    }};
}

#[cfg(test)]
mod class_names_test;

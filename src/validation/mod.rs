//! 表单校验：`required` 与 `email`。
//!
//! Form field validators.
//!
//! Validators return `Ok(())` or a fixed, human-readable message as a plain
//! value so form layers can display it directly.

use regex::Regex;
use serde_json::Value;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Must be a valid email";

/// Outcome of a single field check.
pub type Check = std::result::Result<(), &'static str>;

static EMAIL_RE: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Whether a form value counts as filled in.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().map_or(false, Presence::is_present)
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Presence for [T; N] {
    fn is_present(&self) -> bool {
        N > 0
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! always_present {
    ($($t:ty),*) => {
        $(impl Presence for $t {
            fn is_present(&self) -> bool {
                true
            }
        })*
    };
}

always_present!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Presence for Value {
    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => s.is_present(),
            Value::Array(items) => !items.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
        }
    }
}

/// Fails for absent values, blank strings and empty sequences.
pub fn required<V: Presence + ?Sized>(value: &V) -> Check {
    if value.is_present() {
        Ok(())
    } else {
        Err(REQUIRED_MESSAGE)
    }
}

/// Passes when `value` has the usual `local@domain.tld` shape.
pub fn email(value: &str) -> Check {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE)
    }
}

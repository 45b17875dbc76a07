//! Member-name reconciliation between the native and dynamic sides.

/// Naming convention applied to a native member name before comparing it with
/// an inbound dynamic key.
///
/// The dynamic side conventionally uses lower camel case, so the default
/// transform turns `user_name` into `userName` and comparison is exact
/// equality on the transformed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameConvention {
    /// Lower-camel-case transform of the native member name (default).
    #[default]
    LowerCamel,
    /// Compare names verbatim.
    Preserve,
}

impl NameConvention {
    /// Produce the dynamic-side key for a native member name.
    pub fn dynamic_name(&self, native: &str) -> String {
        match self {
            NameConvention::LowerCamel => to_lower_camel(native),
            NameConvention::Preserve => native.to_string(),
        }
    }
}

/// Convert a native member name to lower camel case.
///
/// Handles both snake_case (`user_name` → `userName`) and PascalCase
/// (`UserName` → `userName`) inputs; names already in lower camel case pass
/// through unchanged.
pub fn to_lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

//! Call-site resolution
//!
//! Every public logging entry point is `#[track_caller]`, so
//! [`Location::caller`] inside the library yields the first frame outside it.
//! Adding internal layers does not shift the reported location as long as each
//! layer between the public method and [`resolve_caller`] is also
//! `#[track_caller]`.
//!
//! Function names cannot be recovered from a [`Location`]; the logging macros
//! capture them at the call site with [`function_name!`](crate::function_name).

use std::panic::Location;

/// Short file name, line and function of a logging call site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallerInfo {
    /// Build caller info, shortening `file` to its base name and `function` to
    /// its last path segment.
    pub fn new(file: &str, line: u32, function: &str) -> Self {
        Self {
            file: short_file_name(file).to_string(),
            line,
            function: short_function_name(function).to_string(),
        }
    }

    /// Caller info for a tracked location, with no function name.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), "")
    }

    /// True when nothing about the call site is known.
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.function.is_empty()
    }
}

/// Resolve the call site of the nearest non-`#[track_caller]` frame.
#[track_caller]
pub fn resolve_caller() -> CallerInfo {
    CallerInfo::from_location(Location::caller())
}

fn short_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn short_function_name(path: &str) -> &str {
    let mut trimmed = path;
    while let Some(rest) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = rest;
    }
    trimmed.rsplit("::").next().unwrap_or(trimmed)
}

/// Expands to the fully qualified path of the enclosing function.
///
/// ```
/// fn handler() -> &'static str {
///     leveled_logger::function_name!()
/// }
/// assert!(handler().ends_with("handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

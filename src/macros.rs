// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Early-return a `CatalogError::Parse` at a `(line, column)` position.
#[macro_export]
macro_rules! bail_parse {
    ($pos:expr, $($arg:tt)*) => {{
        let (line, column) = $pos;
        return Err($crate::error::CatalogError::Parse {
            line,
            column,
            message: format!($($arg)*),
        });
    }};
}

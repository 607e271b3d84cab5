//! Error macros for graphwalk

/// Macro for rejecting a vertex index outside `[0, size)`
#[macro_export]
macro_rules! bail_out_of_range {
    ($role:expr, $vertex:expr, $size:expr) => {
        return Err($crate::error::GraphError::out_of_range(
            $role, $vertex, $size,
        ))
    };
}

/// Macro for creating parse errors at a line number
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::GraphError::parse($line, format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

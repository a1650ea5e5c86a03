//! Call-site capturing logging macros.
//!
//! | macro        | level      | calling info | newline |
//! |--------------|------------|--------------|---------|
//! | `log!`       | Default    | no           | no      |
//! | `logl!`      | caller's   | no           | no      |
//! | `logf!`      | Default    | yes          | no      |
//! | `logfl!`     | caller's   | yes          | no      |
//!
//! Each has an `..ln!` variant (`logln!`, `loglln!`, `logfln!`, `logflln!`) that appends a newline.

/// Bare name of the enclosing function, e.g. `main`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(idx) => &name[idx + 2..],
            None => name,
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $info:expr, $newline:expr, $($arg:tt)+) => {
        $crate::log_func(
            $level,
            ::std::file!(),
            ::std::line!(),
            $crate::function_name!(),
            $info,
            $newline,
            ::std::format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Default, false, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! logln {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Default, false, true, $($arg)+)
    };
}

#[macro_export]
macro_rules! logl {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_at!($level, false, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! loglln {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_at!($level, false, true, $($arg)+)
    };
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Default, true, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! logfln {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Default, true, true, $($arg)+)
    };
}

#[macro_export]
macro_rules! logfl {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_at!($level, true, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! logflln {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_at!($level, true, true, $($arg)+)
    };
}

// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! push_line {
    // Append one formatted line (with '\n') to a String buffer
    ($buf:expr, $($arg:tt)*) => {{
        $buf.push_str(&::std::format!($($arg)*));
        $buf.push('\n');
    }};
}

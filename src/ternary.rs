/// A conditional-expression macro.  Rust's `if` is already an
/// expression, but `cargo fmt` insists on breaking it across lines,
/// and the border-handling tables in the energy and seam code are far
/// easier to read as compact one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` spreads chained if-elses across half a screen, and
/// the border-handling tables in the energy and seam code are much
/// easier to audit as single-line rules.
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

/// A ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it across five lines, and the
/// tables of border-clipping rules in the energy and seam code are far
/// easier to compare when each case fits on one.
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

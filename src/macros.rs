/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Every call site gets its own `Lazy` static, so the pattern is built the
/// first time that site runs and reused afterwards.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

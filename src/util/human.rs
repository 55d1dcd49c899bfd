use std::fmt;

/// Display wrapper rendering a slice as `[v1, v2, ..., vn]`.
pub struct Bracketed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut it = self.0.iter();
        if let Some(first) = it.next() {
            write!(f, "{}", first)?;
        }
        for v in it {
            write!(f, ", {}", v)?;
        }
        f.write_str("]")
    }
}

/// Format a sequence of values: "[0, 5, 10]", or "[]" when empty.
pub fn fmt_seq<T: fmt::Display>(values: &[T]) -> String {
    Bracketed(values).to_string()
}

use std::fmt::{self, Debug, Display, Write};

use super::Enum;

/// Column width `{:#?}` wraps at.
pub const DEFAULT_WIDTH: usize = 79;

impl<V: Debug> Enum<V> {
    /// `#<Name KEY=value ...>` on one line.
    pub fn inspect(&self) -> String {
        let mut out = format!("#<{}", self.display_name());
        for (key, value) in self.pairs() {
            // writing into a String cannot fail
            let _ = write!(out, " {key}={value:?}");
        }
        out.push('>');
        out
    }

    /// The [`Enum::inspect`] line when it fits in `width` columns, otherwise
    /// one pair per line, indented by a space.
    pub fn pretty(&self, width: usize) -> String {
        let line = self.inspect();
        if line.chars().count() <= width {
            return line;
        }

        let mut out = format!("#<{}", self.display_name());
        for (key, value) in self.pairs() {
            let _ = write!(out, "\n {key}={value:?}");
        }
        out.push('>');
        out
    }
}

impl<V: Debug> Display for Enum<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl<V: Debug> Debug for Enum<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.pretty(DEFAULT_WIDTH))
        } else {
            f.write_str(&self.inspect())
        }
    }
}

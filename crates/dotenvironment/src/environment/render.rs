//! Human-readable listing of a resolver's entries.

use std::fmt;

use super::DotEnvironment;
use crate::constants::{CONTAINER_NAME, ENTRY_INDENT};

impl<S> DotEnvironment<S> {
    /// Multi-line listing of every resolved entry, in first-request order.
    ///
    /// ```text
    /// DotEnvironment([
    ///     <ONNYMM_DB_USER[alloc::string::String]= "root">,
    ///     <ONNYMM_DB_PORT[u16]= 5432 (default)>,
    /// ])
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<S> fmt::Display for DotEnvironment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{CONTAINER_NAME}([])");
        }

        writeln!(f, "{CONTAINER_NAME}([")?;
        for entry in self {
            writeln!(f, "{ENTRY_INDENT}{entry},")?;
        }
        write!(f, "])")
    }
}

//! Converts criteria chains into SQL condition text.

pub mod criteria;

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL string during rendering. Criteria render their
/// operands as inline literals and their identifiers with the no-processing
/// policy, so no parameter list or dialect state is carried.
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self { sql: String::new() }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

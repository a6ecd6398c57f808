//! A fluent, immutable builder for composing SQL `WHERE` clauses.
//!
//! Criteria are persistent: every builder call allocates a new node linked to
//! its predecessor and never mutates existing state, so any criteria can be
//! reused as the basis of several extensions. Rendering walks the chain on
//! demand when the owning query is serialized to SQL.
//!
//! ```
//! use criteria::Criteria;
//!
//! let criteria = Criteria::r#where("name")
//!     .is("Foo")
//!     .unwrap()
//!     .and("age")
//!     .greater_than(42)
//!     .unwrap();
//!
//! assert_eq!(criteria.to_sql(), "name = 'Foo' AND age > 42");
//! ```

pub mod ast;
pub mod build;
pub mod error;
pub mod render;

pub use ast::comparator::Comparator;
pub use ast::criteria::{Combinator, Criteria};
pub use ast::operand::Operand;
pub use build::criteria::CriteriaStep;
pub use error::CriteriaError;
pub use render::{Render, Renderer};

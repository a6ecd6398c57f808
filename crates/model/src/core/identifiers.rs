use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How an identifier is transformed when rendered into SQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierProcessing {
    /// Emit the identifier exactly as it was supplied.
    None,
    /// Wrap the identifier in double quotes.
    Quoting,
}

/// The name of a column or table as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqlIdentifier(Arc<str>);

impl SqlIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_sql(&self, processing: IdentifierProcessing) -> String {
        match processing {
            IdentifierProcessing::None => self.0.to_string(),
            IdentifierProcessing::Quoting => format!(r#""{}""#, self.0),
        }
    }
}

impl From<String> for SqlIdentifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SqlIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentifierProcessing, SqlIdentifier};

    #[test]
    fn test_no_processing_renders_verbatim() {
        let ident = SqlIdentifier::new("user_name");
        assert_eq!(ident.to_sql(IdentifierProcessing::None), "user_name");
    }

    #[test]
    fn test_quoting_wraps_in_double_quotes() {
        let ident = SqlIdentifier::new("user_name");
        assert_eq!(
            ident.to_sql(IdentifierProcessing::Quoting),
            r#""user_name""#
        );
    }
}

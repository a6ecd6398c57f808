/// The operator or condition fragment of a single predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Sentinel carried by the canonical empty criteria; renders as nothing.
    Initial,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
    /// A caller-supplied condition fragment, embedded into the SQL verbatim.
    /// The caller is solely responsible for keeping the text injection-safe.
    Custom(String),
}

impl Comparator {
    /// The textual operator/condition fragment used in the rendered SQL. For
    /// custom comparators this is the fully constructed condition, operands
    /// included.
    pub fn as_sql(&self) -> &str {
        match self {
            Comparator::Initial => "",
            Comparator::Equals => "=",
            Comparator::NotEquals => "!=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEquals => "<=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEquals => ">=",
            Comparator::Like => "LIKE",
            Comparator::NotLike => "NOT LIKE",
            Comparator::In => "IN",
            Comparator::NotIn => "NOT IN",
            Comparator::Between => "BETWEEN",
            Comparator::NotBetween => "NOT BETWEEN",
            Comparator::IsNull => "IS NULL",
            Comparator::IsNotNull => "IS NOT NULL",
            Comparator::IsTrue => "IS TRUE",
            Comparator::IsFalse => "IS FALSE",
            Comparator::Custom(condition) => condition,
        }
    }
}

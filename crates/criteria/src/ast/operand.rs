use model::core::value::Value;

/// A comparison operand, tagged by the arity its comparator expects. The
/// builder enforces the pairing at construction time, so a BETWEEN node can
/// only carry a pair and an IN node only a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Scalar(Value),
    /// The bounds of a BETWEEN / NOT BETWEEN range, in order.
    Pair { begin: Value, end: Value },
    List(Vec<Value>),
}

//! Terminal builder steps completing a single criteria node.

use crate::{
    ast::{
        comparator::Comparator,
        criteria::{Combinator, Criteria},
        operand::Operand,
    },
    error::CriteriaError,
};
use model::core::{identifiers::SqlIdentifier, value::Value};
use std::sync::Arc;

/// A builder step bound to a column, plus the chain link the terminal call
/// attaches the new node to. Obtained from [`Criteria::r#where`],
/// [`Criteria::and`] or [`Criteria::or`].
#[derive(Debug, Clone)]
pub struct CriteriaStep {
    column: SqlIdentifier,
    previous: Option<Arc<Criteria>>,
    combinator: Combinator,
}

impl CriteriaStep {
    pub(crate) fn new(
        column: SqlIdentifier,
        previous: Option<Arc<Criteria>>,
        combinator: Combinator,
    ) -> Self {
        Self {
            column,
            previous,
            combinator,
        }
    }

    /// Completes the criteria with `=`.
    pub fn is(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::Equals, value.into())
    }

    /// Completes the criteria with `!=`.
    pub fn not(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::NotEquals, value.into())
    }

    /// Completes the criteria with `IN`.
    pub fn is_in<I>(self, values: I) -> Result<Criteria, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = collect_values(values)?;
        self.create(Comparator::In, Some(Operand::List(values)))
    }

    /// Completes the criteria with `NOT IN`.
    pub fn not_in<I>(self, values: I) -> Result<Criteria, CriteriaError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = collect_values(values)?;
        self.create(Comparator::NotIn, Some(Operand::List(values)))
    }

    /// Completes the criteria with `BETWEEN begin AND end`.
    pub fn between(
        self,
        begin: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Result<Criteria, CriteriaError> {
        let begin = require_value(begin.into(), "begin value")?;
        let end = require_value(end.into(), "end value")?;
        self.create(Comparator::Between, Some(Operand::Pair { begin, end }))
    }

    /// Completes the criteria with `NOT BETWEEN begin AND end`.
    pub fn not_between(
        self,
        begin: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Result<Criteria, CriteriaError> {
        let begin = require_value(begin.into(), "begin value")?;
        let end = require_value(end.into(), "end value")?;
        self.create(Comparator::NotBetween, Some(Operand::Pair { begin, end }))
    }

    /// Completes the criteria with `<`.
    pub fn less_than(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::LessThan, value.into())
    }

    /// Completes the criteria with `<=`.
    pub fn less_than_or_equals(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::LessThanOrEquals, value.into())
    }

    /// Completes the criteria with `>`.
    pub fn greater_than(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::GreaterThan, value.into())
    }

    /// Completes the criteria with `>=`.
    pub fn greater_than_or_equals(
        self,
        value: impl Into<Value>,
    ) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::GreaterThanOrEquals, value.into())
    }

    /// Completes the criteria with `LIKE`.
    pub fn like(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::Like, value.into())
    }

    /// Completes the criteria with `NOT LIKE`.
    pub fn not_like(self, value: impl Into<Value>) -> Result<Criteria, CriteriaError> {
        self.scalar(Comparator::NotLike, value.into())
    }

    /// Completes the criteria with `IS NULL`.
    pub fn is_null(self) -> Result<Criteria, CriteriaError> {
        self.create(Comparator::IsNull, None)
    }

    /// Completes the criteria with `IS NOT NULL`.
    pub fn is_not_null(self) -> Result<Criteria, CriteriaError> {
        self.create(Comparator::IsNotNull, None)
    }

    /// Completes the criteria with `IS TRUE`.
    pub fn is_true(self) -> Result<Criteria, CriteriaError> {
        self.create(
            Comparator::IsTrue,
            Some(Operand::Scalar(Value::Boolean(true))),
        )
    }

    /// Completes the criteria with `IS FALSE`.
    pub fn is_false(self) -> Result<Criteria, CriteriaError> {
        self.create(
            Comparator::IsFalse,
            Some(Operand::Scalar(Value::Boolean(false))),
        )
    }

    /// Completes the criteria with a caller-supplied condition fragment. The
    /// fragment is embedded into the rendered SQL verbatim, so the caller
    /// must make sure it is not vulnerable to SQL injection.
    pub fn custom(self, condition: impl Into<String>) -> Result<Criteria, CriteriaError> {
        self.create(Comparator::Custom(condition.into()), None)
    }

    fn scalar(self, comparator: Comparator, value: Value) -> Result<Criteria, CriteriaError> {
        let value = require_value(value, "value")?;
        self.create(comparator, Some(Operand::Scalar(value)))
    }

    fn create(
        self,
        comparator: Comparator,
        value: Option<Operand>,
    ) -> Result<Criteria, CriteriaError> {
        if self.column.is_empty() {
            return Err(CriteriaError::EmptyColumn);
        }
        Ok(Criteria::new_leaf(
            self.previous,
            self.combinator,
            self.column,
            comparator,
            value,
        ))
    }
}

fn require_value(value: Value, what: &'static str) -> Result<Value, CriteriaError> {
    if value.is_null() {
        return Err(CriteriaError::NullOperand(what));
    }
    Ok(value)
}

fn collect_values<I>(values: I) -> Result<Vec<Value>, CriteriaError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();

    if values.iter().any(Value::is_null) {
        return Err(CriteriaError::NullElement);
    }

    // Guard against the accidental "scalar plus whole collection" call shape,
    // where a caller meant to pass the collection alone.
    if values.len() > 1 && matches!(values[1], Value::Array(_)) {
        return Err(CriteriaError::SingleCollectionArgument(
            values[1].type_name(),
        ));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{comparator::Comparator, criteria::Criteria, operand::Operand},
        error::CriteriaError,
    };
    use model::core::value::Value;

    #[test]
    fn test_is_builds_equality_leaf() {
        let criteria = Criteria::r#where("name").is("Foo").unwrap();

        assert_eq!(criteria.column().unwrap().as_str(), "name");
        assert_eq!(criteria.comparator(), Some(&Comparator::Equals));
        assert_eq!(
            criteria.value(),
            Some(&Operand::Scalar(Value::from("Foo")))
        );
        assert!(!criteria.has_previous());
    }

    #[test]
    fn test_between_stores_ordered_pair() {
        let criteria = Criteria::r#where("age").between(18, 30).unwrap();

        assert_eq!(criteria.comparator(), Some(&Comparator::Between));
        assert_eq!(
            criteria.value(),
            Some(&Operand::Pair {
                begin: Value::Int(18),
                end: Value::Int(30),
            })
        );
    }

    #[test]
    fn test_is_in_stores_list() {
        let criteria = Criteria::r#where("name").is_in(["x", "y"]).unwrap();

        assert_eq!(criteria.comparator(), Some(&Comparator::In));
        assert_eq!(
            criteria.value(),
            Some(&Operand::List(vec![Value::from("x"), Value::from("y")]))
        );
    }

    #[test]
    fn test_truth_checks_store_fixed_boolean() {
        let criteria = Criteria::r#where("active").is_true().unwrap();
        assert_eq!(criteria.comparator(), Some(&Comparator::IsTrue));
        assert_eq!(
            criteria.value(),
            Some(&Operand::Scalar(Value::Boolean(true)))
        );

        let criteria = Criteria::r#where("active").is_false().unwrap();
        assert_eq!(criteria.comparator(), Some(&Comparator::IsFalse));
    }

    #[test]
    fn test_nullity_checks_carry_no_operand() {
        let criteria = Criteria::r#where("name").is_null().unwrap();
        assert_eq!(criteria.comparator(), Some(&Comparator::IsNull));
        assert_eq!(criteria.value(), None);
    }

    #[test]
    fn test_empty_column_is_rejected() {
        assert_eq!(
            Criteria::r#where("").is(1),
            Err(CriteriaError::EmptyColumn)
        );
        assert_eq!(
            Criteria::r#where("").is_null(),
            Err(CriteriaError::EmptyColumn)
        );
    }

    #[test]
    fn test_null_operand_is_rejected() {
        assert_eq!(
            Criteria::r#where("name").is(Value::Null),
            Err(CriteriaError::NullOperand("value"))
        );
        assert_eq!(
            Criteria::r#where("age").between(Value::Null, Value::Int(30)),
            Err(CriteriaError::NullOperand("begin value"))
        );
        assert_eq!(
            Criteria::r#where("age").not_between(Value::Int(18), Value::Null),
            Err(CriteriaError::NullOperand("end value"))
        );
    }

    #[test]
    fn test_null_element_in_list_is_rejected() {
        assert_eq!(
            Criteria::r#where("name").is_in([Value::from("x"), Value::Null]),
            Err(CriteriaError::NullElement)
        );
        assert_eq!(
            Criteria::r#where("name").not_in([Value::Null]),
            Err(CriteriaError::NullElement)
        );
    }

    #[test]
    fn test_collection_as_second_element_is_rejected() {
        let values = [
            Value::Int(1),
            Value::Array(vec![Value::Int(2), Value::Int(3)]),
        ];
        assert_eq!(
            Criteria::r#where("id").is_in(values.clone()),
            Err(CriteriaError::SingleCollectionArgument("array"))
        );
        assert_eq!(
            Criteria::r#where("id").not_in(values),
            Err(CriteriaError::SingleCollectionArgument("array"))
        );
    }

    #[test]
    fn test_single_collection_argument_is_allowed() {
        let criteria = Criteria::r#where("id")
            .is_in([Value::Array(vec![Value::Int(1), Value::Int(2)])])
            .unwrap();
        assert_eq!(criteria.comparator(), Some(&Comparator::In));
    }

    #[test]
    fn test_and_or_choose_the_combinator() {
        use crate::ast::criteria::Combinator;

        let base = Criteria::r#where("a").is(1).unwrap();
        assert_eq!(
            base.and("b").is(2).unwrap().combinator(),
            Combinator::And
        );
        assert_eq!(base.or("b").is(2).unwrap().combinator(), Combinator::Or);
    }
}

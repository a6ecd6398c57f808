use crate::{
    ast::{comparator::Comparator, operand::Operand},
    build::criteria::CriteriaStep,
};
use lazy_static::lazy_static;
use model::core::identifiers::SqlIdentifier;
use std::sync::Arc;

/// How a criteria node joins to the rendered text of its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// First node of a chain; nothing is printed before it.
    Initial,
    And,
    Or,
}

impl Combinator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Combinator::Initial => "",
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

lazy_static! {
    /// The canonical empty criteria, the identity for composition.
    static ref EMPTY: Criteria = Criteria {
        previous: None,
        combinator: Combinator::Initial,
        group: Vec::new(),
        column: None,
        comparator: Some(Comparator::Initial),
        value: None,
        ignore_case: false,
    };
}

/// One immutable node of a `WHERE`-clause expression: either a leaf
/// comparison (column, comparator, operand) or a parenthesized group of child
/// predicates. Nodes link backward through `previous`; the structure is
/// persistent, so a node may serve as the `previous` of any number of
/// descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criteria {
    previous: Option<Arc<Criteria>>,
    combinator: Combinator,
    group: Vec<Criteria>,
    column: Option<SqlIdentifier>,
    comparator: Option<Comparator>,
    value: Option<Operand>,
    ignore_case: bool,
}

impl Criteria {
    /// The empty criteria. Renders to nothing and is the identity for
    /// composition.
    pub fn empty() -> Criteria {
        EMPTY.clone()
    }

    /// Combines the given criteria as an AND group. An empty input yields the
    /// empty criteria; a single element is returned unchanged, without
    /// wrapping.
    pub fn from(mut criteria: Vec<Criteria>) -> Criteria {
        match criteria.len() {
            0 => Criteria::empty(),
            1 => criteria.remove(0),
            _ => Criteria::empty().and_group(criteria),
        }
    }

    /// Starts a criteria for the given column.
    pub fn r#where(column: impl Into<SqlIdentifier>) -> CriteriaStep {
        CriteriaStep::new(column.into(), None, Combinator::Initial)
    }

    /// Continues the chain with `AND` on the given column.
    pub fn and(&self, column: impl Into<SqlIdentifier>) -> CriteriaStep {
        CriteriaStep::new(
            column.into(),
            Some(Arc::new(self.clone())),
            Combinator::And,
        )
    }

    /// Continues the chain with `OR` on the given column.
    pub fn or(&self, column: impl Into<SqlIdentifier>) -> CriteriaStep {
        CriteriaStep::new(column.into(), Some(Arc::new(self.clone())), Combinator::Or)
    }

    /// Combines the given criteria with `AND` as a single-member group.
    pub fn and_criteria(&self, criteria: Criteria) -> Criteria {
        self.and_group(vec![criteria])
    }

    /// Combines the given criteria as a parenthesized group joined with
    /// `AND`.
    pub fn and_group(&self, group: Vec<Criteria>) -> Criteria {
        Criteria::new_group(Some(Arc::new(self.clone())), Combinator::And, group)
    }

    /// Combines the given criteria with `OR` as a single-member group.
    pub fn or_criteria(&self, criteria: Criteria) -> Criteria {
        self.or_group(vec![criteria])
    }

    /// Combines the given criteria as a parenthesized group joined with `OR`.
    pub fn or_group(&self, group: Vec<Criteria>) -> Criteria {
        Criteria::new_group(Some(Arc::new(self.clone())), Combinator::Or, group)
    }

    /// Returns a criteria with the given "ignore case" flag. Returns the
    /// receiver untouched when the flag already matches.
    pub fn ignore_case(self, ignore_case: bool) -> Criteria {
        if self.ignore_case == ignore_case {
            return self;
        }
        Criteria {
            ignore_case,
            ..self
        }
    }

    pub(crate) fn new_leaf(
        previous: Option<Arc<Criteria>>,
        combinator: Combinator,
        column: SqlIdentifier,
        comparator: Comparator,
        value: Option<Operand>,
    ) -> Criteria {
        Criteria {
            combinator: effective_combinator(previous.as_deref(), combinator),
            previous,
            group: Vec::new(),
            column: Some(column),
            comparator: Some(comparator),
            value,
            ignore_case: false,
        }
    }

    pub(crate) fn new_group(
        previous: Option<Arc<Criteria>>,
        combinator: Combinator,
        group: Vec<Criteria>,
    ) -> Criteria {
        Criteria {
            combinator: effective_combinator(previous.as_deref(), combinator),
            previous,
            group,
            column: None,
            comparator: None,
            value: None,
            ignore_case: false,
        }
    }

    pub fn previous(&self) -> Option<&Criteria> {
        self.previous.as_deref()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn group(&self) -> &[Criteria] {
        &self.group
    }

    pub fn column(&self) -> Option<&SqlIdentifier> {
        self.column.as_ref()
    }

    pub fn comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }

    pub fn value(&self) -> Option<&Operand> {
        self.value.as_ref()
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// True iff this node and every ancestor along the `previous` chain are
    /// individually empty.
    pub fn is_empty(&self) -> bool {
        if !self.local_empty() {
            return false;
        }

        let mut parent = self.previous.as_deref();
        while let Some(criteria) = parent {
            if !criteria.local_empty() {
                return false;
            }
            parent = criteria.previous.as_deref();
        }

        true
    }

    pub fn is_group(&self) -> bool {
        !self.group.is_empty()
    }

    fn local_empty(&self) -> bool {
        if self.comparator == Some(Comparator::Initial) {
            return true;
        }
        if self.column.is_some() {
            return false;
        }
        self.group.iter().all(Criteria::is_empty)
    }
}

fn effective_combinator(previous: Option<&Criteria>, combinator: Combinator) -> Combinator {
    // An empty predecessor renders to nothing, so no joining operator may be
    // printed before this node.
    match previous {
        Some(previous) if previous.is_empty() => Combinator::Initial,
        _ => combinator,
    }
}

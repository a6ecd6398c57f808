use crate::{
    ast::{
        comparator::Comparator,
        criteria::{Combinator, Criteria},
        operand::Operand,
    },
    render::{Render, Renderer},
};
use model::core::identifiers::IdentifierProcessing;
use std::fmt;
use tracing::trace;

impl Render for Criteria {
    fn render(&self, r: &mut Renderer) {
        if self.is_empty() {
            return;
        }
        unroll(self, r);
    }
}

impl Criteria {
    /// Renders the criteria into its SQL condition text. An empty criteria
    /// renders to the empty string.
    pub fn to_sql(&self) -> String {
        let mut renderer = Renderer::new();
        self.render(&mut renderer);
        let sql = renderer.finish();
        trace!("rendered criteria: {}", sql);
        sql
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}

/// Renders a chain in chronological order. Nodes only link backward, so the
/// descendants are first collected onto a stack and replayed oldest-first.
fn unroll(criteria: &Criteria, r: &mut Renderer) {
    let mut descendants = Vec::new();
    let mut current = criteria;
    while let Some(previous) = current.previous() {
        descendants.push(current);
        current = previous;
    }

    render_node(current, r);
    for criterion in descendants.into_iter().rev() {
        if criterion.combinator() != Combinator::Initial {
            r.sql.push(' ');
            r.sql.push_str(criterion.combinator().as_sql());
            r.sql.push(' ');
        }
        render_node(criterion, r);
    }
}

fn unroll_group(group: &[Criteria], r: &mut Renderer) {
    r.sql.push('(');

    let mut first = true;
    for criterion in group {
        if criterion.is_empty() {
            continue;
        }

        if !first {
            let combinator = match criterion.combinator() {
                Combinator::Initial => Combinator::And,
                other => other,
            };
            r.sql.push(' ');
            r.sql.push_str(combinator.as_sql());
            r.sql.push(' ');
        }

        unroll(criterion, r);
        first = false;
    }

    r.sql.push(')');
}

fn render_node(criteria: &Criteria, r: &mut Renderer) {
    if criteria.is_empty() {
        return;
    }

    if criteria.is_group() {
        unroll_group(criteria.group(), r);
        return;
    }

    // Validated construction always sets both on a leaf; anything else is a
    // caller contract violation, not a recoverable state.
    let column = criteria
        .column()
        .expect("non-group criteria must have a column");
    let comparator = criteria
        .comparator()
        .expect("non-group criteria must have a comparator");

    r.sql.push_str(&column.to_sql(IdentifierProcessing::None));
    r.sql.push(' ');
    r.sql.push_str(comparator.as_sql());

    match comparator {
        Comparator::Between | Comparator::NotBetween => {
            let Some(Operand::Pair { begin, end }) = criteria.value() else {
                panic!("range criteria must carry a begin/end pair");
            };
            r.sql.push(' ');
            r.sql.push_str(&begin.to_string());
            r.sql.push_str(" AND ");
            r.sql.push_str(&end.to_string());
        }
        Comparator::IsNull
        | Comparator::IsNotNull
        | Comparator::IsTrue
        | Comparator::IsFalse
        | Comparator::Custom(_) => {
            // the operator text is the entire condition fragment
        }
        Comparator::In | Comparator::NotIn => {
            r.sql.push_str(" (");
            render_operand(criteria.value(), r);
            r.sql.push(')');
        }
        _ => {
            r.sql.push(' ');
            render_operand(criteria.value(), r);
        }
    }
}

fn render_operand(value: Option<&Operand>, r: &mut Renderer) {
    match value {
        Some(Operand::Scalar(value)) => r.sql.push_str(&value.to_string()),
        Some(Operand::List(values)) => {
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                r.sql.push_str(&value.to_string());
            }
        }
        Some(Operand::Pair { .. }) => unreachable!("pair operands only occur with BETWEEN"),
        None => r.sql.push_str("null"),
    }
}

mod resolve;


use crate::query::expr::{Expr, Param, write_params};
use derive_more::{Deref, IntoIterator};
use std::fmt;

pub use resolve::resolve_join;

///
/// JoinType
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Inner => "Inner",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Full => "Full",
        };
        write!(f, "{label}")
    }
}

///
/// JoinSpec
///
/// Join specification as plain ordered data: the lambda parameters
/// `t0..tN-1` and one `(JoinType, condition)` pair per joined parameter.
/// Step `i` joins `t{i+1}` onto the accumulated join of `t0..=t{i}`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoinSpec {
    pub params: Vec<Param>,
    pub steps: Vec<(JoinType, Expr)>,
}

impl JoinSpec {
    #[must_use]
    pub const fn new(params: Vec<Param>) -> Self {
        Self {
            params,
            steps: Vec::new(),
        }
    }

    /// Append the next join step.
    #[must_use]
    pub fn join(mut self, join_type: JoinType, condition: Expr) -> Self {
        self.steps.push((join_type, condition));
        self
    }

    /// Number of elements the equivalent array literal must carry.
    #[must_use]
    pub const fn expected_elements(&self) -> usize {
        expected_elements(self.params.len())
    }
}

// `2 * (N - 1)`; a lambda without parameters has no valid arity.
pub(crate) const fn expected_elements(param_count: usize) -> usize {
    2 * param_count.saturating_sub(1)
}

impl fmt::Display for JoinSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &self.params)?;
        write!(f, " [")?;
        for (i, (join_type, condition)) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "JoinType::{join_type}, {condition}")?;
        }
        write!(f, "]")
    }
}

///
/// JoinCondition
///
/// Join condition rebound over the parameter prefix `t0..=t{i+1}`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoinCondition {
    pub params: Vec<Param>,
    pub body: Expr,
}

impl fmt::Display for JoinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &self.params)?;
        write!(f, " {}", self.body)
    }
}

///
/// JoinStep
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoinStep {
    pub join_type: JoinType,
    pub condition: JoinCondition,
}

impl JoinStep {
    /// Parameter this step joins onto the accumulated set.
    #[must_use]
    pub fn joined(&self) -> Option<&Param> {
        self.condition.params.last()
    }
}

///
/// JoinPlan
///
/// Resolved steps in declaration order. A planner walks them left to
/// right, accumulating one joined table per step.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct JoinPlan {
    #[into_iterator(owned, ref)]
    steps: Vec<JoinStep>,
}

impl JoinPlan {
    pub(crate) const fn from_steps(steps: Vec<JoinStep>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<JoinStep> {
        self.steps
    }
}

use crate::{
    JOIN_USAGE_EXAMPLE,
    error::BuildError,
    query::{
        expr::{Expr, Lambda, Literal, Param},
        join::{JoinCondition, JoinPlan, JoinSpec, JoinStep, JoinType, expected_elements},
    },
};
use tracing::{debug, trace};

///
/// Resolve a join specification lambda into ordered join steps.
///
/// `|t0, .., tN-1| [JoinType, condition, JoinType, condition, ..]`
///
/// - the body must be an array literal
/// - it must hold exactly `2 * (N - 1)` elements
/// - parameter names must be distinct
/// - each even element must be a constant `JoinType`
/// - each odd element must be a boolean condition
/// - condition `i` may reference only `t0..=t{i+1}`
///
/// The first failure is returned; no partial plan is produced.
///
pub fn resolve_join(lambda: &Lambda) -> Result<JoinPlan, BuildError> {
    JoinSpec::try_from(lambda)?.resolve()
}

impl TryFrom<&Lambda> for JoinSpec {
    type Error = BuildError;

    fn try_from(lambda: &Lambda) -> Result<Self, Self::Error> {
        let Expr::Array(elements) = &lambda.body else {
            return Err(BuildError::InvalidJoinSpecification {
                spec: lambda.to_string(),
                usage: JOIN_USAGE_EXAMPLE,
            });
        };

        let expected = expected_elements(lambda.params.len());
        if lambda.params.is_empty() || elements.len() != expected {
            return Err(BuildError::JoinArityMismatch {
                spec: lambda.to_string(),
                expected,
                found: elements.len(),
            });
        }
        ensure_distinct_params(&lambda.params, || lambda.to_string())?;

        let steps = elements
            .chunks_exact(2)
            .map(|pair| {
                let join_type = constant_join_type(&pair[0])?;
                let condition = boolean_condition(&pair[1])?;

                Ok((join_type, condition.clone()))
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        Ok(Self {
            params: lambda.params.clone(),
            steps,
        })
    }
}

impl JoinSpec {
    /// Validate and rebind every step over its parameter prefix.
    pub fn resolve(&self) -> Result<JoinPlan, BuildError> {
        let expected = self.expected_elements();
        let found = self.steps.len() * 2;
        if self.params.is_empty() || found != expected {
            return Err(BuildError::JoinArityMismatch {
                spec: self.to_string(),
                expected,
                found,
            });
        }
        ensure_distinct_params(&self.params, || self.to_string())?;

        let mut steps = Vec::with_capacity(self.steps.len());
        for (step, (join_type, condition)) in self.steps.iter().enumerate() {
            let body = boolean_condition(condition)?;
            let scope = &self.params[..step + 2];
            ensure_in_scope(step, scope, body)?;

            trace!(step, join_type = %join_type, condition = %body, "resolved join step");
            steps.push(JoinStep {
                join_type: *join_type,
                condition: JoinCondition {
                    params: scope.to_vec(),
                    body: body.clone(),
                },
            });
        }

        debug!(
            tables = self.params.len(),
            steps = steps.len(),
            "resolved join specification"
        );

        Ok(JoinPlan::from_steps(steps))
    }
}

// Join-type slot: folds to a JoinType constant, possibly boxed.
fn constant_join_type(expr: &Expr) -> Result<JoinType, BuildError> {
    match expr.fold_constant() {
        Some(Literal::JoinType(join_type)) => Ok(join_type),
        _ => Err(BuildError::UnsupportedJoinType {
            expr: expr.to_string(),
        }),
    }
}

// Condition slot: boolean once conversion wrappers are stripped.
fn boolean_condition(expr: &Expr) -> Result<&Expr, BuildError> {
    let condition = expr.strip_convert();
    if condition.static_type().is_bool() {
        Ok(condition)
    } else {
        Err(BuildError::InvalidJoinCondition {
            expr: condition.to_string(),
        })
    }
}

// Parameter names must be unique, so each names exactly one position.
fn ensure_distinct_params(
    params: &[Param],
    spec: impl FnOnce() -> String,
) -> Result<(), BuildError> {
    let repeated = params
        .iter()
        .enumerate()
        .any(|(i, param)| params[..i].iter().any(|earlier| earlier.name == param.name));
    if repeated {
        return Err(BuildError::InvalidJoinSpecification {
            spec: spec(),
            usage: JOIN_USAGE_EXAMPLE,
        });
    }

    Ok(())
}

// Every referenced parameter must already be joined at this step.
fn ensure_in_scope(step: usize, scope: &[Param], body: &Expr) -> Result<(), BuildError> {
    match body
        .referenced_params()
        .into_iter()
        .find(|param| !scope.contains(param))
    {
        Some(param) => Err(BuildError::ParameterOutOfScope {
            step,
            parameter: param.name.clone(),
        }),
        None => Ok(()),
    }
}

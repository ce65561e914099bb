//! Typed object-expression input.
//!
//! A small expression tree over entity parameters: enough to express join
//! specifications (`|user, city| [JoinType::Left, user.city_id == city.id]`)
//! and to answer what the join resolver asks of it: the static type of a
//! node, its constant value if it has one, and the parameters it references.

#[cfg(test)]
mod tests;

use crate::{
    model::{entity::EntityModel, field::FieldKind},
    query::join::JoinType,
    value::Value,
};
use std::fmt;

///
/// Param
///
/// Lambda parameter bound to one entity. Identity is name plus entity.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub name: String,
    pub entity: &'static EntityModel,
}

impl Param {
    #[must_use]
    pub fn new(name: impl Into<String>, entity: &'static EntityModel) -> Self {
        Self {
            name: name.into(),
            entity,
        }
    }

    /// Reference this parameter as an expression.
    #[must_use]
    pub fn expr(&self) -> Expr {
        Expr::Param(self.clone())
    }

    /// Member access on this parameter, e.g. `user.city_id`.
    #[must_use]
    pub fn member(&self, member: impl Into<String>) -> Expr {
        self.expr().member(member)
    }
}

///
/// Literal
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Literal {
    Value(Value),
    JoinType(JoinType),
}

///
/// ExprType
/// Static result type of an expression node.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExprType {
    Scalar(FieldKind),
    /// Enum literal not tied to a declared model.
    LooseEnum,
    Null,
    JoinType,
    Entity(&'static str),
    Array,
    Object,
    Unknown,
}

impl ExprType {
    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Scalar(FieldKind::Bool))
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::LooseEnum => write!(f, "enum"),
            Self::Null => write!(f, "null"),
            Self::JoinType => write!(f, "JoinType"),
            Self::Entity(path) => write!(f, "{path}"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Param(Param),
    Member { target: Box<Self>, member: String },
    Constant(Literal),
    /// Type-conversion wrapper; value preserving.
    Convert { expr: Box<Self>, to: ExprType },
    Equal(Box<Self>, Box<Self>),
    NotEqual(Box<Self>, Box<Self>),
    AndAlso(Box<Self>, Box<Self>),
    OrElse(Box<Self>, Box<Self>),
    Array(Vec<Self>),
}

impl Expr {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(Literal::Value(value.into()))
    }

    #[must_use]
    pub const fn join_type(join_type: JoinType) -> Self {
        Self::Constant(Literal::JoinType(join_type))
    }

    #[must_use]
    pub fn member(self, member: impl Into<String>) -> Self {
        Self::Member {
            target: Box::new(self),
            member: member.into(),
        }
    }

    #[must_use]
    pub fn convert(self, to: ExprType) -> Self {
        Self::Convert {
            expr: Box::new(self),
            to,
        }
    }

    /// `(object)expr`, the boxing an object-array element receives.
    #[must_use]
    pub fn boxed(self) -> Self {
        self.convert(ExprType::Object)
    }

    #[must_use]
    pub fn equal(self, rhs: Self) -> Self {
        Self::Equal(Box::new(self), Box::new(rhs))
    }

    #[must_use]
    pub fn not_equal(self, rhs: Self) -> Self {
        Self::NotEqual(Box::new(self), Box::new(rhs))
    }

    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        Self::AndAlso(Box::new(self), Box::new(rhs))
    }

    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        Self::OrElse(Box::new(self), Box::new(rhs))
    }

    #[must_use]
    pub const fn array(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }

    ///
    /// ANALYSIS
    ///

    /// Strip any outer value-preserving conversion wrappers.
    #[must_use]
    pub fn strip_convert(&self) -> &Self {
        let mut expr = self;
        while let Self::Convert { expr: inner, .. } = expr {
            expr = inner;
        }
        expr
    }

    /// Static result type of this node.
    #[must_use]
    pub fn static_type(&self) -> ExprType {
        match self {
            Self::Param(param) => ExprType::Entity(param.entity.path),
            Self::Member { target, member } => match target.strip_convert() {
                Self::Param(param) => param
                    .entity
                    .member_kind(member)
                    .map_or(ExprType::Unknown, ExprType::Scalar),
                _ => ExprType::Unknown,
            },
            Self::Constant(Literal::JoinType(_)) => ExprType::JoinType,
            Self::Constant(Literal::Value(value)) => value_type(value),
            Self::Convert { to, .. } => *to,
            Self::Equal(..) | Self::NotEqual(..) | Self::AndAlso(..) | Self::OrElse(..) => {
                ExprType::Scalar(FieldKind::Bool)
            }
            Self::Array(_) => ExprType::Array,
        }
    }

    /// Evaluate this node to a literal when it depends on no parameter.
    ///
    /// Conversions are value preserving and fold through. Comparisons fold
    /// to `Bool`; `&&`/`||` fold only over boolean operands.
    #[must_use]
    pub fn fold_constant(&self) -> Option<Literal> {
        match self {
            Self::Constant(literal) => Some(literal.clone()),
            Self::Convert { expr, .. } => expr.fold_constant(),
            Self::Equal(left, right) => {
                let equal = left.fold_constant()? == right.fold_constant()?;
                Some(Literal::Value(Value::Bool(equal)))
            }
            Self::NotEqual(left, right) => {
                let equal = left.fold_constant()? == right.fold_constant()?;
                Some(Literal::Value(Value::Bool(!equal)))
            }
            Self::AndAlso(left, right) => {
                let (left, right) = (left.fold_bool()?, right.fold_bool()?);
                Some(Literal::Value(Value::Bool(left && right)))
            }
            Self::OrElse(left, right) => {
                let (left, right) = (left.fold_bool()?, right.fold_bool()?);
                Some(Literal::Value(Value::Bool(left || right)))
            }
            Self::Param(_) | Self::Member { .. } | Self::Array(_) => None,
        }
    }

    fn fold_bool(&self) -> Option<bool> {
        match self.fold_constant()? {
            Literal::Value(Value::Bool(value)) => Some(value),
            _ => None,
        }
    }

    /// Parameters referenced anywhere in this expression, in first-use order.
    #[must_use]
    pub fn referenced_params(&self) -> Vec<&Param> {
        let mut out = Vec::new();
        collect_params(self, &mut out);
        out
    }
}

fn collect_params<'a>(expr: &'a Expr, out: &mut Vec<&'a Param>) {
    match expr {
        Expr::Param(param) => {
            if !out.contains(&param) {
                out.push(param);
            }
        }
        Expr::Member { target, .. } => collect_params(target, out),
        Expr::Convert { expr, .. } => collect_params(expr, out),
        Expr::Constant(_) => {}
        Expr::Equal(left, right)
        | Expr::NotEqual(left, right)
        | Expr::AndAlso(left, right)
        | Expr::OrElse(left, right) => {
            collect_params(left, out);
            collect_params(right, out);
        }
        Expr::Array(elements) => {
            for element in elements {
                collect_params(element, out);
            }
        }
    }
}

const fn value_type(value: &Value) -> ExprType {
    let kind = match value {
        Value::Null => return ExprType::Null,
        Value::Enum(_) => return ExprType::LooseEnum,
        Value::Bool(_) => FieldKind::Bool,
        Value::Float64(_) => FieldKind::Float64,
        Value::Int8(_) => FieldKind::Int8,
        Value::Int16(_) => FieldKind::Int16,
        Value::Int32(_) => FieldKind::Int32,
        Value::Int64(_) => FieldKind::Int64,
        Value::Text(_) => FieldKind::Text,
        Value::Uint8(_) => FieldKind::Uint8,
        Value::Uint16(_) => FieldKind::Uint16,
        Value::Uint32(_) => FieldKind::Uint32,
        Value::Uint64(_) => FieldKind::Uint64,
        Value::Ulid(_) => FieldKind::Ulid,
    };

    ExprType::Scalar(kind)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(param) => write!(f, "{}", param.name),
            Self::Member { target, member } => write!(f, "{target}.{member}"),
            Self::Constant(Literal::Value(value)) => write!(f, "{value}"),
            Self::Constant(Literal::JoinType(join_type)) => write!(f, "JoinType::{join_type}"),
            Self::Convert { expr, to } => write!(f, "({to})({expr})"),
            Self::Equal(left, right) => write_binary(f, left, "==", right),
            Self::NotEqual(left, right) => write_binary(f, left, "!=", right),
            Self::AndAlso(left, right) => write_binary(f, left, "&&", right),
            Self::OrElse(left, right) => write_binary(f, left, "||", right),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Nested logical operands are parenthesized; comparisons never nest.
fn write_binary(f: &mut fmt::Formatter<'_>, left: &Expr, op: &str, right: &Expr) -> fmt::Result {
    write_operand(f, left)?;
    write!(f, " {op} ")?;
    write_operand(f, right)
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::AndAlso(..) | Expr::OrElse(..) => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

///
/// Lambda
///
/// Expression with an ordered parameter list, e.g. a join specification.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lambda {
    pub params: Vec<Param>,
    pub body: Expr,
}

impl Lambda {
    #[must_use]
    pub const fn new(params: Vec<Param>, body: Expr) -> Self {
        Self { params, body }
    }

    /// Position of `param` in the parameter list.
    #[must_use]
    pub fn position(&self, param: &Param) -> Option<usize> {
        self.params.iter().position(|candidate| candidate == param)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_params(f, &self.params)?;
        write!(f, " {}", self.body)
    }
}

pub(crate) fn write_params(f: &mut fmt::Formatter<'_>, params: &[Param]) -> fmt::Result {
    write!(f, "|")?;
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", param.name)?;
    }
    write!(f, "|")
}

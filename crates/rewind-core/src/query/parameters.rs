use super::{BinaryOp, Condition, Operand};
use crate::{Value, ValueMap};

use std::fmt::Write;

/// How the restrictions of one [`Parameters`] group are joined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    fn as_str(self) -> &'static str {
        match self {
            Connective::And => " and ",
            Connective::Or => " or ",
        }
    }
}

/// A tree of where-clause restrictions.
///
/// Restrictions are collected by identifier mappers and rendered to a clause
/// fragment for the query layer with [`Parameters::render`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Parameters {
    connective: Connective,
    conditions: Vec<Condition>,
}

impl Parameters {
    pub fn new(connective: Connective) -> Parameters {
        Parameters {
            connective,
            conditions: vec![],
        }
    }

    /// Returns `true` if rendering would produce no restriction.
    pub fn is_empty(&self) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Group(group) => group.is_empty(),
            _ => false,
        })
    }

    /// Compares two property paths.
    pub fn add_where(&mut self, left: impl Into<String>, op: BinaryOp, right: impl Into<String>) {
        self.conditions.push(Condition::Compare {
            left: left.into(),
            op,
            right: Operand::Property(right.into()),
        });
    }

    /// Compares a property path with a value bound at render time.
    pub fn add_where_with_param(
        &mut self,
        property: impl Into<String>,
        op: BinaryOp,
        value: impl Into<Value>,
    ) {
        self.conditions.push(Condition::Compare {
            left: property.into(),
            op,
            right: Operand::Param(value.into()),
        });
    }

    /// Compares a property path with a parameter the caller binds by name.
    pub fn add_where_with_named_param(
        &mut self,
        property: impl Into<String>,
        op: BinaryOp,
        name: impl Into<String>,
    ) {
        self.conditions.push(Condition::Compare {
            left: property.into(),
            op,
            right: Operand::NamedParam(name.into()),
        });
    }

    /// Adds `IS NULL` when `equals` is true, `IS NOT NULL` otherwise.
    pub fn add_null_restriction(&mut self, property: impl Into<String>, equals: bool) {
        self.conditions.push(Condition::IsNull {
            property: property.into(),
            negate: !equals,
        });
    }

    /// Opens a nested group and returns it for further restrictions.
    pub fn add_sub_parameters(&mut self, connective: Connective) -> &mut Parameters {
        self.conditions
            .push(Condition::Group(Parameters::new(connective)));

        match self.conditions.last_mut() {
            Some(Condition::Group(group)) => group,
            _ => unreachable!(),
        }
    }

    /// Renders the restrictions as a where-clause fragment.
    ///
    /// Positional values become `:_p0`, `:_p1`, ... in depth-first order and
    /// are returned keyed by their placeholder name. Named parameters render
    /// as `:name` and are left for the caller to bind.
    pub fn render(&self) -> (String, ValueMap) {
        let mut dst = String::new();
        let mut params = ValueMap::new();

        if self.is_empty() {
            dst.push_str("1 = 1");
        } else {
            self.render_into(&mut dst, &mut params);
        }

        (dst, params)
    }

    fn render_into(&self, dst: &mut String, params: &mut ValueMap) {
        let mut sep = "";

        for condition in &self.conditions {
            if let Condition::Group(group) = condition {
                if group.is_empty() {
                    continue;
                }
            }

            dst.push_str(sep);
            sep = self.connective.as_str();

            match condition {
                Condition::Compare { left, op, right } => {
                    write!(dst, "{left} {op} ").unwrap();

                    match right {
                        Operand::Property(property) => dst.push_str(property),
                        Operand::Param(value) => {
                            let name = format!("_p{}", params.len());
                            write!(dst, ":{name}").unwrap();
                            params.insert(name, value.clone());
                        }
                        Operand::NamedParam(name) => write!(dst, ":{name}").unwrap(),
                    }
                }
                Condition::IsNull { property, negate } => {
                    dst.push_str(property);
                    dst.push_str(if *negate { " is not null" } else { " is null" });
                }
                Condition::Group(group) => {
                    dst.push('(');
                    group.render_into(dst, params);
                    dst.push(')');
                }
            }
        }
    }
}

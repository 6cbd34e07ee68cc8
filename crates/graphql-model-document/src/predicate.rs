//! Boolean predicates over model fields.
//!
//! ```ignore
//! let predicate = field("id").eq("id")
//!     & (field("title").begins_with("Title") | field("content").contains("content"));
//! ```

use std::ops;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryPredicate {
    /// Matches everything, translates to no filter at all.
    All,
    Operation(FieldPredicate),
    Group(PredicateGroup),
    Not(Box<QueryPredicate>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    field: String,
    operator: QueryOperator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredicateGroup {
    combinator: Combinator,
    predicates: Vec<QueryPredicate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Combinator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOperator {
    Eq(Value),
    Ne(Value),
    Gt(Value),
    Lt(Value),
    Ge(Value),
    Le(Value),
    Contains(Value),
    NotContains(Value),
    BeginsWith(Value),
    Between(Value, Value),
    /// Operator given by its keyword, checked when the predicate is translated.
    Named { keyword: String, value: Value },
}

/// Entry point for building field predicates: `field("title").eq("Hello")`.
pub fn field(name: impl Into<String>) -> QueryField {
    QueryField(name.into())
}

#[derive(Debug, Clone)]
pub struct QueryField(String);

impl QueryField {
    pub fn name(&self) -> &str {
        &self.0
    }

    fn predicate(&self, operator: QueryOperator) -> QueryPredicate {
        QueryPredicate::Operation(FieldPredicate {
            field: self.0.clone(),
            operator,
        })
    }

    pub fn eq(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Eq(value.into()))
    }

    pub fn ne(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Ne(value.into()))
    }

    pub fn gt(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Gt(value.into()))
    }

    pub fn lt(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Lt(value.into()))
    }

    pub fn ge(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Ge(value.into()))
    }

    pub fn le(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Le(value.into()))
    }

    pub fn contains(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Contains(value.into()))
    }

    pub fn not_contains(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::NotContains(value.into()))
    }

    pub fn begins_with(&self, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::BeginsWith(value.into()))
    }

    pub fn between(&self, start: impl Into<Value>, end: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Between(start.into(), end.into()))
    }

    pub fn operator(&self, keyword: impl Into<String>, value: impl Into<Value>) -> QueryPredicate {
        self.predicate(QueryOperator::Named {
            keyword: keyword.into(),
            value: value.into(),
        })
    }
}

impl QueryPredicate {
    pub fn and(predicates: impl IntoIterator<Item = QueryPredicate>) -> Self {
        Self::group(Combinator::And, predicates)
    }

    pub fn or(predicates: impl IntoIterator<Item = QueryPredicate>) -> Self {
        Self::group(Combinator::Or, predicates)
    }

    pub fn not(predicate: QueryPredicate) -> Self {
        QueryPredicate::Not(Box::new(predicate))
    }

    fn group(combinator: Combinator, predicates: impl IntoIterator<Item = QueryPredicate>) -> Self {
        QueryPredicate::Group(PredicateGroup {
            combinator,
            predicates: predicates.into_iter().collect(),
        })
    }

    /// Adds `rhs` to `self` under `combinator`, extending `self` in place when it already is a
    /// group of that kind so that `a & b & c` stays a single `and`.
    fn combine(self, combinator: Combinator, rhs: QueryPredicate) -> Self {
        match self {
            QueryPredicate::Group(mut group) if group.combinator == combinator => {
                group.predicates.push(rhs);
                QueryPredicate::Group(group)
            }
            lhs => Self::group(combinator, [lhs, rhs]),
        }
    }
}

impl ops::BitAnd for QueryPredicate {
    type Output = QueryPredicate;

    fn bitand(self, rhs: QueryPredicate) -> QueryPredicate {
        match (self, rhs) {
            (QueryPredicate::All, other) | (other, QueryPredicate::All) => other,
            (lhs, rhs) => lhs.combine(Combinator::And, rhs),
        }
    }
}

impl ops::BitOr for QueryPredicate {
    type Output = QueryPredicate;

    fn bitor(self, rhs: QueryPredicate) -> QueryPredicate {
        match (self, rhs) {
            (QueryPredicate::All, _) | (_, QueryPredicate::All) => QueryPredicate::All,
            (lhs, rhs) => lhs.combine(Combinator::Or, rhs),
        }
    }
}

impl ops::Not for QueryPredicate {
    type Output = QueryPredicate;

    fn not(self) -> QueryPredicate {
        QueryPredicate::not(self)
    }
}

impl FieldPredicate {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &QueryOperator {
        &self.operator
    }
}

impl PredicateGroup {
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn predicates(&self) -> &[QueryPredicate] {
        &self.predicates
    }
}

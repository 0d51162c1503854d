use std::fmt;

use crate::{
    dialect::Quotes,
    raw::Raw,
    writer::{FormatContext, FormatWriter, Rendered},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl FormatWriter for Conjunction {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

/// One element of a criteria: a raw predicate or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Raw(Raw),
    Group(Criteria),
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Raw(Raw::new(value))
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Raw(Raw::new(value))
    }
}

impl From<&String> for Term {
    fn from(value: &String) -> Self {
        Term::Raw(Raw::new(value.as_str()))
    }
}

impl From<Raw> for Term {
    fn from(value: Raw) -> Self {
        Term::Raw(value)
    }
}

impl From<Criteria> for Term {
    fn from(value: Criteria) -> Self {
        Term::Group(value)
    }
}

impl FormatWriter for Term {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Term::Raw(raw) => raw.format_writer(context),
            // nested groups are always wrapped, even with a single term
            Term::Group(criteria) => {
                context.writer.write_char('(')?;
                criteria.format_writer(context)?;
                context.writer.write_char(')')
            }
        }
    }
}

/// A boolean expression tree combining raw predicates and nested criteria
/// under a single conjunction.
///
/// ```
/// use squill::{and, or};
///
/// let criteria = and!["a = 1", or!["b = 2", "c = 3", and!["d = 4", "e = 5"]]];
/// assert_eq!("a = 1 AND (b = 2 OR c = 3 OR (d = 4 AND e = 5))", criteria.to_string());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Criteria {
    conjunction: Conjunction,
    terms: Vec<Term>,
}

impl Criteria {
    pub fn new(conjunction: Conjunction, terms: Vec<Term>) -> Self {
        Self { conjunction, terms }
    }

    pub fn and<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Self::new(Conjunction::And, terms.into_iter().map(Into::into).collect())
    }

    pub fn or<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Self::new(Conjunction::Or, terms.into_iter().map(Into::into).collect())
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Wraps `self` and `other` as the two groups of a new criteria.
    pub(crate) fn combine(self, conjunction: Conjunction, other: Criteria) -> Self {
        Self::new(conjunction, vec![Term::Group(self), Term::Group(other)])
    }
}

impl From<&str> for Criteria {
    fn from(value: &str) -> Self {
        Criteria::and([value])
    }
}

impl From<String> for Criteria {
    fn from(value: String) -> Self {
        Criteria::and([value])
    }
}

impl From<&String> for Criteria {
    fn from(value: &String) -> Self {
        Criteria::and([value])
    }
}

impl From<Raw> for Criteria {
    fn from(value: Raw) -> Self {
        Criteria::and([value])
    }
}

impl FormatWriter for Criteria {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                context.writer.write_char(' ')?;
                self.conjunction.format_writer(context)?;
                context.writer.write_char(' ')?;
            }
            term.format_writer(context)?;
        }
        Ok(())
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quotes = Quotes::none();
        fmt::Display::fmt(&Rendered::new(self, &quotes), f)
    }
}

mod builder;
mod col;
mod dialect;
mod expr;
mod ident;
mod join;
mod paginate;
mod raw;
mod source;
mod writer;

pub use builder::{Part, Query, QueryKind};
pub use col::Projection;
pub use dialect::{Dialect, HasDialect, MsSql, MySql, Postgres, Quotes, Sqlite};
pub use expr::{Conjunction, Criteria, Direction, Grouping, Ordering, Term};
pub use ident::{Ident, IntoIdent};
pub use join::Join;
pub use paginate::Paginator;
pub use raw::Raw;
pub use source::Source;

/// A fresh select query with no clauses, rendering `SELECT *`.
pub fn select() -> Query {
    Query::select()
}

pub fn ident_static(value: &'static str) -> Ident {
    Ident::new_static(value)
}

pub fn ident(value: &str) -> Ident {
    Ident::new(value)
}

pub fn raw_static(value: &'static str) -> Raw {
    Raw::new_static(value)
}

pub fn raw(value: &str) -> Raw {
    Raw::new(value)
}

/// Builds a [`Criteria`] joining its terms with `AND`. Each term is anything
/// convertible to a [`Term`]: predicate text or a nested criteria.
///
/// ```
/// use squill::{and, or};
///
/// let criteria = and!["a = 1", or!["b = 2", "c = 3"]];
/// assert_eq!("a = 1 AND (b = 2 OR c = 3)", criteria.to_string());
/// ```
#[macro_export]
macro_rules! and {
    ( $($term:expr),* $(,)? ) => {
        $crate::Criteria::new(
            $crate::Conjunction::And,
            ::std::vec![$( $crate::Term::from($term) ),*],
        )
    };
}

/// Same as [`and!`] with `OR` between the terms.
#[macro_export]
macro_rules! or {
    ( $($term:expr),* $(,)? ) => {
        $crate::Criteria::new(
            $crate::Conjunction::Or,
            ::std::vec![$( $crate::Term::from($term) ),*],
        )
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::{dialect::Quotes, writer};

    pub(crate) fn format_writer<W: writer::FormatWriter>(node: W, quotes: &Quotes) -> String {
        writer::Rendered::new(&node, quotes).to_string()
    }

    #[test]
    fn test_empty_query() {
        assert_eq!("SELECT *", crate::select().to_sql());
    }

    #[test]
    fn test_macros_match_constructors() {
        assert_eq!(crate::Criteria::and(["a", "b"]), and!["a", "b"]);
        assert_eq!(crate::Criteria::or(["a", "b"]), or!["a", "b",]);
    }
}

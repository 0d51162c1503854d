use smol_str::SmolStr;

/// Strings wrapped around every rendered schema, table, field and alias name.
/// Both sides are empty by default, which disables quoting.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Quotes {
    left: SmolStr,
    right: SmolStr,
}

impl Quotes {
    pub fn none() -> Self {
        Self::default()
    }

    /// The same quote on both sides, like `` ` `` or `"`.
    pub fn symmetric<T>(quote: T) -> Self
    where
        T: Into<SmolStr>,
    {
        let quote = quote.into();
        Self {
            left: quote.clone(),
            right: quote,
        }
    }

    /// Distinct left and right quotes, like `[` and `]`.
    pub fn pair<L, R>(left: L, right: R) -> Self
    where
        L: Into<SmolStr>,
        R: Into<SmolStr>,
    {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn left(&self) -> &str {
        self.left.as_str()
    }

    pub fn right(&self) -> &str {
        self.right.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
    MsSql,
}

impl Dialect {
    pub fn quotes(self) -> Quotes {
        match self {
            Dialect::Postgres | Dialect::Sqlite => Quotes::symmetric("\""),
            Dialect::MySql => Quotes::symmetric("`"),
            Dialect::MsSql => Quotes::pair("[", "]"),
        }
    }
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

pub struct MsSql;

impl HasDialect for MsSql {
    const DIALECT: Dialect = Dialect::MsSql;
}

#[cfg(feature = "postgres")]
impl HasDialect for sqlx::Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

#[cfg(feature = "mysql")]
impl HasDialect for sqlx::MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

#[cfg(feature = "sqlite")]
impl HasDialect for sqlx::Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quotes_are_empty() {
        let quotes = Quotes::default();
        assert_eq!("", quotes.left());
        assert_eq!("", quotes.right());
    }

    #[test]
    fn test_symmetric_quotes() {
        let quotes = Quotes::symmetric("`");
        assert_eq!("`", quotes.left());
        assert_eq!("`", quotes.right());
    }

    #[test]
    fn test_dialect_quotes() {
        assert_eq!(Quotes::symmetric("\""), Postgres::DIALECT.quotes());
        assert_eq!(Quotes::symmetric("`"), MySql::DIALECT.quotes());
        assert_eq!(Quotes::symmetric("\""), Sqlite::DIALECT.quotes());
        assert_eq!(Quotes::pair("[", "]"), MsSql::DIALECT.quotes());
    }
}

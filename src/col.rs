use std::fmt;

use crate::{
    ident::{Ident, IntoIdent},
    raw::Raw,
    writer::{FormatContext, FormatWriter},
};

/// One output column of a select: a qualified column name or a raw
/// expression, optionally aliased.
///
/// When `expression` is set it is written verbatim and the schema, table and
/// name are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Projection {
    pub schema: Option<Ident>,
    pub table: Option<Ident>,
    pub name: Option<Ident>,
    pub expression: Option<Raw>,
    pub alias: Option<Ident>,
}

impl Projection {
    pub fn column<T: IntoIdent>(name: T) -> Self {
        Self {
            name: Some(name.into_ident()),
            ..Default::default()
        }
    }

    pub fn expr<T: Into<Raw>>(expression: T) -> Self {
        Self {
            expression: Some(expression.into()),
            ..Default::default()
        }
    }

    pub fn schema<T: IntoIdent>(mut self, schema: T) -> Self {
        self.schema = Some(schema.into_ident());
        self
    }

    pub fn table<T: IntoIdent>(mut self, table: T) -> Self {
        self.table = Some(table.into_ident());
        self
    }

    pub fn alias<T: IntoIdent>(mut self, alias: T) -> Self {
        self.alias = Some(alias.into_ident());
        self
    }
}

impl From<&str> for Projection {
    fn from(value: &str) -> Self {
        Self::column(value)
    }
}

impl From<String> for Projection {
    fn from(value: String) -> Self {
        Self::column(value)
    }
}

impl From<Ident> for Projection {
    fn from(value: Ident) -> Self {
        Self::column(value)
    }
}

impl From<Raw> for Projection {
    fn from(value: Raw) -> Self {
        Self::expr(value)
    }
}

impl FormatWriter for Projection {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        // an empty expression falls back to the column name
        let expression = self
            .expression
            .as_ref()
            .filter(|expression| !expression.as_str().is_empty());
        if let Some(expression) = expression {
            expression.format_writer(context)?;
        } else {
            context.write_qualified(&[
                self.schema.as_ref(),
                self.table.as_ref(),
                self.name.as_ref(),
            ])?;
        }
        context.write_alias(" AS ", self.alias.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Quotes, raw_static, tests::format_writer};

    use super::*;

    #[test]
    fn test_single_column() {
        let projection = Projection::from("id");
        assert_eq!("\"id\"", format_writer(projection, &Quotes::symmetric("\"")));
    }

    #[test]
    fn test_qualified_alias() {
        let projection = Projection::column("field").table("table1").schema("db1").alias("alias1");
        assert_eq!(
            "[db1].[table1].[field] AS [alias1]",
            format_writer(projection, &Quotes::pair("[", "]"))
        );
    }

    #[test]
    fn test_expression_ignores_identifiers() {
        let projection = Projection::expr("SUM(x)").table("ignored").alias("exp_alias");
        assert_eq!(
            "SUM(x) AS [exp_alias]",
            format_writer(projection, &Quotes::pair("[", "]"))
        );
    }

    #[test]
    fn test_empty_expression_and_alias_are_unset() {
        let projection = Projection {
            expression: Some(Raw::new("")),
            ..Projection::column("id")
        };
        assert_eq!("`id`", format_writer(projection, &Quotes::symmetric("`")));
        let projection = Projection::column("name").alias("");
        assert_eq!("`name`", format_writer(projection, &Quotes::symmetric("`")));
    }

    #[test]
    fn test_raw_converts_to_expression() {
        let projection = Projection::from(raw_static("COUNT(*)"));
        assert_eq!(None, projection.name);
        assert_eq!("COUNT(*)", format_writer(projection, &Quotes::symmetric("`")));
    }
}

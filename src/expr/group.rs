use crate::{
    ident::{Ident, IntoIdent},
    writer::FormatWriter,
};

/// One `GROUP BY` key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub schema: Option<Ident>,
    pub table: Option<Ident>,
    pub field: Ident,
}

impl Grouping {
    pub fn new<T: IntoIdent>(field: T) -> Self {
        Self {
            field: field.into_ident(),
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
}

impl From<&str> for Grouping {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Grouping {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Ident> for Grouping {
    fn from(value: Ident) -> Self {
        Self::new(value)
    }
}

impl FormatWriter for Grouping {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_qualified(&[self.schema.as_ref(), self.table.as_ref(), Some(&self.field)])
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Quotes, tests::format_writer};

    use super::*;

    #[test]
    fn test_bare_field() {
        assert_eq!("user_type", format_writer(Grouping::from("user_type"), &Quotes::none()));
    }

    #[test]
    fn test_table_field() {
        let grouping = Grouping::new("baz").table("bar");
        assert_eq!("\"bar\".\"baz\"", format_writer(grouping, &Quotes::symmetric("\"")));
    }
}

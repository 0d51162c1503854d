use crate::{
    ident::{Ident, IntoIdent},
    writer::{self, FormatWriter},
};

/// A `FROM` entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Source {
    pub schema: Option<Ident>,
    pub table: Ident,
    pub alias: Option<Ident>,
}

impl Source {
    pub fn new<T: IntoIdent>(table: T) -> Self {
        Self {
            table: table.into_ident(),
            ..Default::default()
        }
    }

    pub fn schema<T: IntoIdent>(mut self, schema: T) -> Self {
        self.schema = Some(schema.into_ident());
        self
    }

    pub fn alias<T: IntoIdent>(mut self, alias: T) -> Self {
        self.alias = Some(alias.into_ident());
        self
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Ident> for Source {
    fn from(value: Ident) -> Self {
        Self::new(value)
    }
}

impl FormatWriter for Source {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_qualified(&[self.schema.as_ref(), Some(&self.table)])?;
        context.write_alias(" ", self.alias.as_ref())
    }
}

use smol_str::SmolStr;

use crate::{
    expr::Criteria,
    ident::{Ident, IntoIdent},
    writer::FormatWriter,
};

/// A joined table. The join type is free-form text upper-cased when
/// rendered, so `"left"`, `"LEFT OUTER"` or anything else is accepted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Join {
    pub join_type: SmolStr,
    pub schema: Option<Ident>,
    pub table: Ident,
    pub alias: Option<Ident>,
    pub on: Criteria,
}

impl Join {
    pub fn new<J, T>(join_type: J, table: T) -> Self
    where
        J: Into<SmolStr>,
        T: IntoIdent,
    {
        Self {
            join_type: join_type.into(),
            table: table.into_ident(),
            ..Default::default()
        }
    }

    pub fn inner<T: IntoIdent>(table: T) -> Self {
        Self::new(SmolStr::new_static("inner"), table)
    }

    pub fn left<T: IntoIdent>(table: T) -> Self {
        Self::new(SmolStr::new_static("left"), table)
    }

    pub fn right<T: IntoIdent>(table: T) -> Self {
        Self::new(SmolStr::new_static("right"), table)
    }

    pub fn cross<T: IntoIdent>(table: T) -> Self {
        Self::new(SmolStr::new_static("cross"), table)
    }

    pub fn schema<T: IntoIdent>(mut self, schema: T) -> Self {
        self.schema = Some(schema.into_ident());
        self
    }

    pub fn alias<T: IntoIdent>(mut self, alias: T) -> Self {
        self.alias = Some(alias.into_ident());
        self
    }

    pub fn on<C: Into<Criteria>>(mut self, criteria: C) -> Self {
        self.on = criteria.into();
        self
    }
}

impl FormatWriter for Join {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_char(' ')?;
        for c in self.join_type.chars().flat_map(char::to_uppercase) {
            context.writer.write_char(c)?;
        }
        context.writer.write_str(" JOIN ")?;
        context.write_qualified(&[self.schema.as_ref(), Some(&self.table)])?;
        context.write_alias(" ", self.alias.as_ref())?;
        // an empty criteria means no on clause at all
        if !self.on.is_empty() {
            context.writer.write_str(" ON ")?;
            self.on.format_writer(context)?;
        }
        Ok(())
    }
}

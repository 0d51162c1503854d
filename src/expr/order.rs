use std::fmt;

use crate::{
    ident::{Ident, IntoIdent},
    writer::{self, FormatWriter},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FormatWriter for Direction {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        match self {
            Direction::Asc => context.writer.write_str("ASC"),
            Direction::Desc => context.writer.write_str("DESC"),
        }
    }
}

/// One `ORDER BY` key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub schema: Option<Ident>,
    pub table: Option<Ident>,
    pub field: Ident,
    pub direction: Direction,
}

impl Ordering {
    pub fn asc<T: IntoIdent>(field: T) -> Self {
        Self {
            field: field.into_ident(),
            ..Default::default()
        }
    }

    pub fn desc<T: IntoIdent>(field: T) -> Self {
        Self {
            field: field.into_ident(),
            direction: Direction::Desc,
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

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn is_desc(&self) -> bool {
        matches!(self.direction, Direction::Desc)
    }
}

impl From<&str> for Ordering {
    fn from(value: &str) -> Self {
        Self::asc(value)
    }
}

impl From<String> for Ordering {
    fn from(value: String) -> Self {
        Self::asc(value)
    }
}

impl From<Ident> for Ordering {
    fn from(value: Ident) -> Self {
        Self::asc(value)
    }
}

impl FormatWriter for Ordering {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        context.write_qualified(&[self.schema.as_ref(), self.table.as_ref(), Some(&self.field)])?;
        context.writer.write_char(' ')?;
        self.direction.format_writer(context)
    }
}

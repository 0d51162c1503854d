use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::writer::{self, FormatWriter};

/// A schema, table, field or alias name. Rendered wrapped in the query's
/// identifier quotes.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(SmolStr);

pub trait IntoIdent {
    fn into_ident(self) -> Ident;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Ident {
        self
    }
}

impl IntoIdent for &str {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for &String {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for String {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Box<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Arc<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Cow<'_, str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for SmolStr {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl Ident {
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    #[inline]
    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FormatWriter for Ident {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_ident(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Quotes, tests::format_writer};

    use super::*;

    #[test]
    fn test_format_ident_simple() {
        let ident = Ident::new_static("users");
        assert_eq!("users", format_writer(ident, &Quotes::none()));
        let ident = Ident::new_static("users");
        assert_eq!("`users`", format_writer(ident, &Quotes::symmetric("`")));
    }

    #[test]
    fn test_format_ident_is_not_split() {
        let ident = Ident::new_static("some space.x as y");
        assert_eq!(
            "\"some space.x as y\"",
            format_writer(ident, &Quotes::symmetric("\""))
        );
    }

    #[test]
    fn test_into_ident() {
        assert_eq!(Ident::new("id"), "id".into_ident());
        assert_eq!(Ident::new("id"), String::from("id").into_ident());
        assert_eq!(Ident::new("id"), Cow::Borrowed("id").into_ident());
    }
}

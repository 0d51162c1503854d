use std::fmt::{self, Write};

use crate::{dialect::Quotes, ident::Ident};

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) quotes: &'a Quotes,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, quotes: &'a Quotes) -> Self {
        Self { writer, quotes }
    }

    /// Wraps `part` in the configured quotes. The name itself is written
    /// as-is, quote characters inside it are not escaped.
    pub(crate) fn write_ident(&mut self, part: &str) -> fmt::Result {
        self.writer.write_str(self.quotes.left())?;
        self.writer.write_str(part)?;
        self.writer.write_str(self.quotes.right())
    }

    /// Writes a dotted chain such as `schema.table.name`, skipping missing
    /// or empty segments along with their dot.
    pub(crate) fn write_qualified(&mut self, segments: &[Option<&Ident>]) -> fmt::Result {
        let mut first = true;
        for ident in segments.iter().flatten().filter(|ident| !ident.is_empty()) {
            if !first {
                self.writer.write_char('.')?;
            }
            self.write_ident(ident.as_str())?;
            first = false;
        }
        Ok(())
    }

    /// Writes `separator` and the quoted alias. An empty alias counts as no
    /// alias at all.
    pub(crate) fn write_alias(&mut self, separator: &str, alias: Option<&Ident>) -> fmt::Result {
        if let Some(alias) = alias.filter(|alias| !alias.is_empty()) {
            self.writer.write_str(separator)?;
            self.write_ident(alias.as_str())?;
        }
        Ok(())
    }

    pub(crate) fn write_list<T: FormatWriter>(&mut self, items: &[T]) -> fmt::Result {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.writer.write_str(", ")?;
            }
            item.format_writer(self)?;
        }
        Ok(())
    }
}

/// Display adapter rendering any node with a given set of identifier quotes.
pub(crate) struct Rendered<'a, T: ?Sized> {
    node: &'a T,
    quotes: &'a Quotes,
}

impl<'a, T: ?Sized> Rendered<'a, T> {
    pub(crate) fn new(node: &'a T, quotes: &'a Quotes) -> Self {
        Self { node, quotes }
    }
}

impl<T: FormatWriter + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut context = FormatContext::new(f, self.quotes);
        self.node.format_writer(&mut context)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ident, tests::format_writer};

    use super::*;

    struct Chain(Vec<Option<Ident>>);

    impl FormatWriter for Chain {
        fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
            let segments: Vec<Option<&Ident>> = self.0.iter().map(Option::as_ref).collect();
            context.write_qualified(&segments)
        }
    }

    #[test]
    fn test_write_ident_unquoted() {
        let chain = Chain(vec![Some(ident("users"))]);
        assert_eq!("users", format_writer(chain, &Quotes::none()));
    }

    #[test]
    fn test_write_ident_asymmetric() {
        let chain = Chain(vec![Some(ident("db")), Some(ident("users"))]);
        assert_eq!("[db].[users]", format_writer(chain, &Quotes::pair("[", "]")));
    }

    #[test]
    fn test_write_qualified_skips_empty() {
        let chain = Chain(vec![None, Some(ident("")), Some(ident("id"))]);
        assert_eq!("\"id\"", format_writer(chain, &Quotes::symmetric("\"")));
    }

    struct Aliased(Option<Ident>);

    impl FormatWriter for Aliased {
        fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
            context.write_ident("users")?;
            context.write_alias(" AS ", self.0.as_ref())
        }
    }

    #[test]
    fn test_write_alias_skips_empty() {
        let quotes = Quotes::symmetric("`");
        assert_eq!("`users`", format_writer(Aliased(Some(ident(""))), &quotes));
        assert_eq!("`users`", format_writer(Aliased(None), &quotes));
        assert_eq!("`users` AS `u`", format_writer(Aliased(Some(ident("u"))), &quotes));
    }

    #[test]
    fn test_write_ident_no_escaping() {
        let chain = Chain(vec![Some(ident("us`ers"))]);
        assert_eq!("`us`ers`", format_writer(chain, &Quotes::symmetric("`")));
    }
}

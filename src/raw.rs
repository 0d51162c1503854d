use smol_str::SmolStr;

use crate::writer::FormatWriter;

/// A verbatim SQL fragment: a predicate, an expression or anything else the
/// caller already made safe. Never quoted, never escaped.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Raw(SmolStr);

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Raw {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}

impl FormatWriter for Raw {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Quotes, tests::format_writer};

    use super::*;

    #[test]
    fn test_raw_is_verbatim() {
        let value = Raw::new_static("'te?st' = $1");
        assert_eq!("'te?st' = $1", format_writer(value, &Quotes::symmetric("\"")));
    }

    #[test]
    fn test_raw_ignores_quotes() {
        let value = Raw::new_static("COUNT(*)");
        assert_eq!("COUNT(*)", format_writer(value, &Quotes::pair("[", "]")));
    }
}

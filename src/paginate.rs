use crate::writer::FormatWriter;

/// `LIMIT` and `OFFSET` of a query. A value of zero is not rendered, so zero
/// and unset are the same thing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub limit: u64,
    pub offset: u64,
}

impl Paginator {
    pub fn limit(&mut self, limit: u64) {
        self.limit = limit;
    }

    pub fn offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Zero-based `page` of `per_page` rows.
    pub fn paginate(&mut self, page: u64, per_page: u64) {
        self.limit = per_page;
        self.offset = page.saturating_mul(per_page);
    }
}

impl FormatWriter for Paginator {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        if self.limit > 0 {
            write!(context.writer, " LIMIT {}", self.limit)?;
        }
        if self.offset > 0 {
            write!(context.writer, " OFFSET {}", self.offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Quotes, tests::format_writer};

    use super::*;

    #[test]
    fn test_zero_is_omitted() {
        let paginator = Paginator::default();
        assert_eq!("", format_writer(paginator, &Quotes::none()));
    }

    #[test]
    fn test_limit_offset() {
        let mut paginator = Paginator::default();
        paginator.limit(10);
        paginator.offset(5);
        assert_eq!(" LIMIT 10 OFFSET 5", format_writer(paginator, &Quotes::none()));
    }

    #[test]
    fn test_offset_only() {
        let mut paginator = Paginator::default();
        paginator.offset(20);
        assert_eq!(" OFFSET 20", format_writer(paginator, &Quotes::none()));
    }

    #[test]
    fn test_paginate() {
        let mut paginator = Paginator::default();
        paginator.paginate(3, 15);
        assert_eq!(15, paginator.limit);
        assert_eq!(45, paginator.offset);
        paginator.paginate(0, 15);
        assert_eq!(" LIMIT 15", format_writer(paginator, &Quotes::none()));
    }
}

use std::fmt;

use squill_derive::FilterMethods;

use crate::{
    col::Projection,
    dialect::{Dialect, HasDialect, Quotes},
    expr::{Conjunction, Criteria, Grouping, Ordering},
    join::Join,
    paginate::Paginator,
    source::Source,
    writer::{FormatContext, FormatWriter, Rendered},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    #[default]
    Select,
}

impl FormatWriter for QueryKind {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            QueryKind::Select => context.writer.write_str("SELECT"),
        }
    }
}

/// The two criteria slots of a query. The derive generates the
/// `set_*`/`and_*`/`or_*` methods on [`Query`] for each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FilterMethods)]
pub(crate) enum Filter {
    Where,
    Having,
}

/// Any clause entry, for adding heterogeneous parts through [`Query::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Source(Source),
    Projection(Projection),
    Join(Join),
    Grouping(Grouping),
    Ordering(Ordering),
}

impl From<Source> for Part {
    fn from(value: Source) -> Self {
        Part::Source(value)
    }
}

impl From<Projection> for Part {
    fn from(value: Projection) -> Self {
        Part::Projection(value)
    }
}

impl From<Join> for Part {
    fn from(value: Join) -> Self {
        Part::Join(value)
    }
}

impl From<Grouping> for Part {
    fn from(value: Grouping) -> Self {
        Part::Grouping(value)
    }
}

impl From<Ordering> for Part {
    fn from(value: Ordering) -> Self {
        Part::Ordering(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Kind,
    Fields,
    From,
    Joins,
    Filter(Filter),
    GroupBy,
    OrderBy,
    Paginate,
}

impl Section {
    const ORDER: [Section; 9] = [
        Section::Kind,
        Section::Fields,
        Section::From,
        Section::Joins,
        Section::Filter(Filter::Where),
        Section::GroupBy,
        Section::Filter(Filter::Having),
        Section::OrderBy,
        Section::Paginate,
    ];
}

struct SectionWriter<'q> {
    query: &'q Query,
    section: Section,
}

impl FormatWriter for SectionWriter<'_> {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let query = self.query;
        match self.section {
            Section::Kind => query.kind.format_writer(context),
            Section::Fields => {
                if query.projections.is_empty() {
                    return context.writer.write_str(" *");
                }
                context.writer.write_char(' ')?;
                context.write_list(&query.projections)
            }
            Section::From => {
                if query.sources.is_empty() {
                    return Ok(());
                }
                context.writer.write_str(" FROM ")?;
                context.write_list(&query.sources)
            }
            Section::Joins => {
                // every join carries its own leading space
                for join in &query.joins {
                    join.format_writer(context)?;
                }
                Ok(())
            }
            Section::Filter(filter) => {
                let criteria = query.slot(filter);
                if criteria.is_empty() {
                    return Ok(());
                }
                context.writer.write_char(' ')?;
                context.writer.write_str(filter.keyword())?;
                context.writer.write_char(' ')?;
                criteria.format_writer(context)
            }
            Section::GroupBy => {
                if query.groupings.is_empty() {
                    return Ok(());
                }
                context.writer.write_str(" GROUP BY ")?;
                context.write_list(&query.groupings)
            }
            Section::OrderBy => {
                if query.orderings.is_empty() {
                    return Ok(());
                }
                context.writer.write_str(" ORDER BY ")?;
                context.write_list(&query.orderings)
            }
            Section::Paginate => query.paginator.format_writer(context),
        }
    }
}

/// Accumulates the clauses of one select statement and renders them in
/// canonical SQL order.
///
/// ```
/// use squill::{or, Query};
///
/// let mut query = Query::select();
/// query
///     .add_from("users")
///     .add_fields(["id", "username"])
///     .set_where(or!["username = $1", "updated_at >= $2"])
///     .add_ordering("username")
///     .set_identifier_quote("`");
///
/// assert_eq!(
///     "SELECT `id`, `username` FROM `users` WHERE username = $1 OR updated_at >= $2 ORDER BY `username` ASC",
///     query.to_sql()
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    kind: QueryKind,
    sources: Vec<Source>,
    projections: Vec<Projection>,
    joins: Vec<Join>,
    maybe_where: Criteria,
    groupings: Vec<Grouping>,
    maybe_having: Criteria,
    orderings: Vec<Ordering>,
    paginator: Paginator,
    quotes: Quotes,
}

impl Query {
    pub fn select() -> Self {
        Self {
            kind: QueryKind::Select,
            ..Default::default()
        }
    }

    // quoting

    /// Uses the same quote on both sides of every identifier.
    pub fn set_identifier_quote<T: Into<smol_str::SmolStr>>(&mut self, quote: T) -> &mut Self {
        self.quotes = Quotes::symmetric(quote);
        self
    }

    pub fn set_identifier_quotes<L, R>(&mut self, left: L, right: R) -> &mut Self
    where
        L: Into<smol_str::SmolStr>,
        R: Into<smol_str::SmolStr>,
    {
        self.quotes = Quotes::pair(left, right);
        self
    }

    pub fn set_quotes(&mut self, quotes: Quotes) -> &mut Self {
        self.quotes = quotes;
        self
    }

    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.quotes = dialect.quotes();
        self
    }

    pub fn dialect_of<D: HasDialect>(&mut self) -> &mut Self {
        self.dialect(D::DIALECT)
    }

    // clause accumulation

    pub fn add_from<T: Into<Source>>(&mut self, source: T) -> &mut Self {
        self.sources.push(source.into());
        self
    }

    pub fn add_froms<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Source>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn add_field<T: Into<Projection>>(&mut self, field: T) -> &mut Self {
        self.projections.push(field.into());
        self
    }

    pub fn add_fields<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Projection>,
    {
        self.projections.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn add_join(&mut self, join: Join) -> &mut Self {
        self.joins.push(join);
        self
    }

    pub fn add_joins<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator<Item = Join>,
    {
        self.joins.extend(joins);
        self
    }

    pub fn add_grouping<T: Into<Grouping>>(&mut self, grouping: T) -> &mut Self {
        self.groupings.push(grouping.into());
        self
    }

    pub fn add_groupings<I>(&mut self, groupings: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Grouping>,
    {
        self.groupings.extend(groupings.into_iter().map(Into::into));
        self
    }

    pub fn add_ordering<T: Into<Ordering>>(&mut self, ordering: T) -> &mut Self {
        self.orderings.push(ordering.into());
        self
    }

    pub fn add_orderings<I>(&mut self, orderings: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Ordering>,
    {
        self.orderings.extend(orderings.into_iter().map(Into::into));
        self
    }

    pub fn add<T: Into<Part>>(&mut self, part: T) -> &mut Self {
        match part.into() {
            Part::Source(source) => self.add_from(source),
            Part::Projection(projection) => self.add_field(projection),
            Part::Join(join) => self.add_join(join),
            Part::Grouping(grouping) => self.add_grouping(grouping),
            Part::Ordering(ordering) => self.add_ordering(ordering),
        }
    }

    pub fn add_all<I>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        for part in parts {
            self.add(part);
        }
        self
    }

    // filters

    fn slot(&self, filter: Filter) -> &Criteria {
        match filter {
            Filter::Where => &self.maybe_where,
            Filter::Having => &self.maybe_having,
        }
    }

    fn slot_mut(&mut self, filter: Filter) -> &mut Criteria {
        match filter {
            Filter::Where => &mut self.maybe_where,
            Filter::Having => &mut self.maybe_having,
        }
    }

    pub(crate) fn set_filter(&mut self, filter: Filter, criteria: Criteria) -> &mut Self {
        *self.slot_mut(filter) = criteria;
        self
    }

    pub(crate) fn combine_filter(
        &mut self,
        filter: Filter,
        conjunction: Conjunction,
        criteria: Criteria,
    ) -> &mut Self {
        let slot = self.slot_mut(filter);
        if slot.is_empty() {
            *slot = criteria;
            return self;
        }
        let previous = std::mem::take(slot);
        tracing::debug!(
            clause = filter.keyword(),
            conjunction = conjunction.as_str(),
            "nesting previous criteria"
        );
        *slot = previous.combine(conjunction, criteria);
        self
    }

    // limit and offset

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.paginator.limit(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.paginator.offset(offset);
        self
    }

    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        self.paginator.paginate(page, per_page);
        self
    }

    // introspection

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }

    pub fn orderings(&self) -> &[Ordering] {
        &self.orderings
    }

    pub fn where_criteria(&self) -> &Criteria {
        &self.maybe_where
    }

    pub fn having_criteria(&self) -> &Criteria {
        &self.maybe_having
    }

    pub fn pagination(&self) -> Paginator {
        self.paginator
    }

    pub fn quotes(&self) -> &Quotes {
        &self.quotes
    }

    // rendering

    fn render_section(&self, section: Section) -> String {
        let writer = SectionWriter {
            query: self,
            section,
        };
        Rendered::new(&writer, &self.quotes).to_string()
    }

    /// `" *"` or the space-prefixed projection list.
    pub fn fields_sql(&self) -> String {
        self.render_section(Section::Fields)
    }

    pub fn from_sql(&self) -> String {
        self.render_section(Section::From)
    }

    pub fn joins_sql(&self) -> String {
        self.render_section(Section::Joins)
    }

    pub fn where_sql(&self) -> String {
        self.render_section(Section::Filter(Filter::Where))
    }

    pub fn groupings_sql(&self) -> String {
        self.render_section(Section::GroupBy)
    }

    pub fn having_sql(&self) -> String {
        self.render_section(Section::Filter(Filter::Having))
    }

    pub fn orderings_sql(&self) -> String {
        self.render_section(Section::OrderBy)
    }

    pub fn to_sql(&self) -> String {
        let sql = self.to_string();
        tracing::trace!(sql = %sql, "rendered query");
        sql
    }
}

impl FormatWriter for Query {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for section in Section::ORDER {
            SectionWriter {
                query: self,
                section,
            }
            .format_writer(context)?;
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered::new(self, &self.quotes), f)
    }
}

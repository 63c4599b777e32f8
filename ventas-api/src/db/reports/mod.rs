//! Warehouse reports
//!
//! Every report is a static [`Report`] descriptor: the SELECT head, an
//! optional fixed predicate, the column a year range applies to, and the
//! GROUP BY / HAVING / ORDER BY tail. [`Report::statement`] turns a
//! descriptor plus a [`ReportFilter`] into SQL with bound parameters, and
//! [`fetch`] runs it into typed rows.

pub mod catalog;
pub mod rows;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlRow;

use super::query_builder::{QueryBuilder, Statement};

/// What a report answers when it finds no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnEmpty {
    /// 404 with the report's "not found" message
    NotFound,
    /// 200 envelope with `data: []`
    EmptyData,
}

/// Client-facing messages of a report
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub ok: &'static str,
    pub empty: &'static str,
    pub failed: &'static str,
}

/// Static description of one report
#[derive(Debug)]
pub struct Report {
    pub name: &'static str,
    /// `SELECT ... FROM ... JOIN ...`, no WHERE
    pub select: &'static str,
    /// Predicate applied on every run
    pub condition: Option<&'static str>,
    /// Column compared against the optional year range
    pub year_column: Option<&'static str>,
    /// GROUP BY / HAVING / ORDER BY
    pub tail: &'static str,
    pub messages: Messages,
    pub on_empty: OnEmpty,
    /// Failure body carries the driver error when exposure is enabled
    pub error_detail: bool,
}

/// Inclusive year range, kept as the text the client sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange {
    pub start: String,
    pub end: String,
}

impl YearRange {
    /// Both bounds must be present and non-empty, otherwise no range
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Some(Self {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => None,
        }
    }
}

/// Request-side filter for a report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub years: Option<YearRange>,
}

impl ReportFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn years(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            years: YearRange::from_params(start, end),
        }
    }
}

impl Report {
    pub fn supports_years(&self) -> bool {
        self.year_column.is_some()
    }

    /// Compose the statement for this report. Pure; a year range is ignored
    /// by reports without a year column.
    pub fn statement(&self, filter: &ReportFilter) -> Statement {
        let mut builder = QueryBuilder::new();
        if let Some(condition) = self.condition {
            builder.add_condition(condition);
        }
        if let (Some(column), Some(years)) = (self.year_column, filter.years.as_ref()) {
            builder.add_between(column, &years.start, &years.end);
        }
        builder.finish(self.select, self.tail)
    }
}

/// Run a report and decode its rows
pub async fn fetch<R>(
    pool: &MySqlPool,
    report: &Report,
    filter: &ReportFilter,
) -> Result<Vec<R>, sqlx::Error>
where
    R: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Unpin,
{
    let statement = report.statement(filter);
    tracing::debug!(report = report.name, sql = statement.sql(), "Running report");
    statement
        .bind(sqlx::query_as::<_, R>(statement.sql()))
        .fetch_all(pool)
        .await
}

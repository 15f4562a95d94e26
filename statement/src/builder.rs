//! Statement builder
//!
//! Accumulates the parts of a query through chained calls and renders an
//! immutable [`Statement`] on demand. A builder belongs to one paging
//! session; only its offset changes while the session runs.

use crate::errors::StatementError;
use crate::ordering::SortOrder;
use crate::placeholder;
use crate::statement::Statement;
use std::collections::BTreeMap;
use value_mapping::BindValue;

const SELECT: &str = "SELECT";
const FROM: &str = "FROM";
const WHERE: &str = "WHERE";
const ORDER_BY: &str = "ORDER BY";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementBuilder {
    select: Option<String>,
    from: Option<String>,
    filter: Option<String>,
    order_by: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    values: BTreeMap<String, BindValue>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selected columns, e.g. `"Id, Name"`
    pub fn select(mut self, columns: &str) -> Self {
        self.select = clause(columns, SELECT);
        self
    }

    /// Set the table to select from
    pub fn from(mut self, table: &str) -> Self {
        self.from = clause(table, FROM);
        self
    }

    /// Set the filter, replacing any previous one. `:name` placeholders are
    /// resolved against bound variables when the statement is rendered.
    pub fn where_clause(mut self, predicate: &str) -> Self {
        self.filter = clause(predicate, WHERE);
        self
    }

    /// Set the ordering clause, e.g. `"id ASC"`. Replaces any previous ordering.
    pub fn order_by(mut self, ordering: &str) -> Self {
        self.order_by = clause(ordering, ORDER_BY);
        self
    }

    pub fn order_by_field(self, field: &str, order: SortOrder) -> Self {
        let ordering = format!("{} {}", field, order.to_pql());
        self.order_by(&ordering)
    }

    /// Set the page size. Not checked against the service maximum here.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set an absolute offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn remove_limit_and_offset(mut self) -> Self {
        self.limit = None;
        self.offset = None;
        self
    }

    /// Bind a value to a placeholder name. Binding the same name again
    /// replaces the earlier value.
    pub fn with_bind_variable_value(mut self, name: &str, value: impl Into<BindValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Advance the offset by `amount`. There is no upper bound; moving past
    /// the result set size is how a paging loop learns it is finished.
    pub fn increase_offset_by(&mut self, amount: u32) {
        let current = self.offset.unwrap_or(0);
        self.offset = Some(current.saturating_add(amount));
    }

    pub fn current_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    pub fn current_limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn bound_value(&self, name: &str) -> Option<&BindValue> {
        self.values.get(name)
    }

    /// Render the accumulated state into a [`Statement`].
    ///
    /// Rendering has no side effects: the same builder state always yields
    /// the same statement.
    pub fn to_statement(&self) -> Result<Statement, StatementError> {
        self.validate()?;

        let mut parts: Vec<String> = Vec::new();
        if let (Some(select), Some(from)) = (&self.select, &self.from) {
            parts.push(format!("{} {} {} {}", SELECT, select, FROM, from));
        }
        if let Some(filter) = &self.filter {
            parts.push(format!("{} {}", WHERE, filter));
        }
        if let Some(order_by) = &self.order_by {
            parts.push(format!("{} {}", ORDER_BY, order_by));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("LIMIT {}", limit));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("OFFSET {}", offset));
        }

        let query = parts.join(" ");
        tracing::trace!(query = %query, bound = self.values.len(), "rendered statement");

        Ok(Statement {
            query,
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            values: self.values.clone(),
        })
    }

    fn validate(&self) -> Result<(), StatementError> {
        match (&self.select, &self.from) {
            (Some(_), None) => {
                return Err(StatementError::IncompleteSelect(
                    "SELECT requires a FROM clause".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(StatementError::IncompleteSelect(
                    "FROM requires a SELECT clause".to_string(),
                ));
            }
            _ => {}
        }

        if self.limit == Some(0) {
            return Err(StatementError::ZeroLimit);
        }

        for (name, value) in &self.values {
            if !placeholder::is_valid_name(name) {
                return Err(StatementError::InvalidBindVariableName(name.clone()));
            }
            value
                .validate()
                .map_err(|source| StatementError::InvalidValue {
                    name: name.clone(),
                    source,
                })?;
        }

        if let Some(filter) = &self.filter {
            if let Some(unbound) = placeholder::placeholders(filter)
                .into_iter()
                .find(|name| !self.values.contains_key(name))
            {
                return Err(StatementError::UnboundPlaceholder(unbound));
            }
        }

        Ok(())
    }
}

/// Trim a clause and drop its leading keyword if the caller included it.
/// Blank clauses are treated as absent.
fn clause(text: &str, keyword: &str) -> Option<String> {
    let trimmed = text.trim();
    let body = match trimmed.get(..keyword.len()) {
        Some(head)
            if head.eq_ignore_ascii_case(keyword)
                && trimmed[keyword.len()..]
                    .chars()
                    .next()
                    .map_or(true, char::is_whitespace) =>
        {
            trimmed[keyword.len()..].trim_start()
        }
        _ => trimmed,
    };

    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

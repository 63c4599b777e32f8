use sqlx::MySql;
use sqlx::query::QueryAs;

type MySqlArgs<'q> = <MySql as sqlx::Database>::Arguments<'q>;

/// Query builder for statements with optional WHERE conditions
///
/// Values always travel as bound parameters. Condition text comes from
/// the caller's static SQL, never from request input.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition (bind its placeholders separately)
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add a text binding
    pub fn bind_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.bindings.push(value.into());
        self
    }

    /// Add `field BETWEEN ? AND ?` with both bounds bound as text
    pub fn add_between(&mut self, field: &str, low: &str, high: &str) -> &mut Self {
        self.conditions.push(format!("{field} BETWEEN ? AND ?"));
        self.bind_text(low).bind_text(high)
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Assemble `head`, the WHERE clause and `tail` into a statement
    pub fn finish(self, head: &str, tail: &str) -> Statement {
        let mut sql = String::with_capacity(head.len() + tail.len() + 64);
        sql.push_str(head.trim_end());
        sql.push_str(&self.build_where_clause());
        if !tail.is_empty() {
            sql.push(' ');
            sql.push_str(tail.trim());
        }
        Statement {
            sql,
            bindings: self.bindings,
        }
    }
}

/// A complete SQL statement and the values bound to its placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    bindings: Vec<String>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }

    /// Apply bindings to a SQLx query_as, in placeholder order
    pub fn bind<'q, O>(
        &'q self,
        mut query: QueryAs<'q, MySql, O, MySqlArgs<'q>>,
    ) -> QueryAs<'q, MySql, O, MySqlArgs<'q>> {
        for binding in &self.bindings {
            query = query.bind(binding.as_str());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_where_clause() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.build_where_clause(), "");
    }

    #[test]
    fn test_single_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_condition("p.stock > 0");
        assert_eq!(builder.build_where_clause(), " WHERE p.stock > 0");
    }

    #[test]
    fn test_multiple_conditions() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("p.stock > 0")
            .add_between("t.año", "2022", "2023");
        assert_eq!(
            builder.build_where_clause(),
            " WHERE p.stock > 0 AND t.año BETWEEN ? AND ?"
        );
    }

    #[test]
    fn test_between_binds_both_bounds_as_text() {
        let mut builder = QueryBuilder::new();
        builder.add_between("t.año", "2020", "2021");
        let stmt = builder.finish("SELECT 1 FROM Dim_Tiempo t", "");
        assert_eq!(
            stmt.bindings(),
            &["2020".to_string(), "2021".to_string()]
        );
    }

    #[test]
    fn test_finish_places_where_between_head_and_tail() {
        let mut builder = QueryBuilder::new();
        builder.add_between("t.año", "2020", "2021");
        let stmt = builder.finish(
            "SELECT t.mes FROM Dim_Tiempo t\n",
            "\n GROUP BY t.mes ORDER BY t.mes ",
        );
        assert_eq!(
            stmt.sql(),
            "SELECT t.mes FROM Dim_Tiempo t WHERE t.año BETWEEN ? AND ? GROUP BY t.mes ORDER BY t.mes"
        );
    }

    #[test]
    fn test_hostile_input_stays_in_bindings() {
        let mut builder = QueryBuilder::new();
        builder.add_between("t.año", "2020; DROP TABLE Ventas", "2021");
        let stmt = builder.finish("SELECT 1 FROM Dim_Tiempo t", "");
        assert!(!stmt.sql().contains("DROP"));
        assert_eq!(stmt.bindings().len(), 2);
    }
}

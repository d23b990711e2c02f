pub mod bootstrap;
pub mod ids;
pub mod lookup;

use anyhow::{bail, Context};
use diesel::{
    pg::PgConnection,
    prelude::*,
    sql_types::{Array, BigInt, Bool, Nullable, Text},
};

use self::ids::IdStrategy;

/// One open PostgreSQL connection plus the statement primitives every
/// operation is built from.
pub struct Session {
    conn: Option<PgConnection>,
    id_strategy: IdStrategy,
}

#[derive(QueryableByName)]
struct RowCells {
    #[sql_type = "Array<Nullable<Text>>"]
    cells: Vec<Option<String>>,
}

#[derive(QueryableByName)]
struct Presence {
    #[sql_type = "Bool"]
    present: bool,
}

#[derive(QueryableByName)]
struct SequenceValue {
    #[sql_type = "BigInt"]
    value: i64,
}

impl Session {
    pub fn connect(conn_info: &str, id_strategy: IdStrategy) -> anyhow::Result<Self> {
        let conn = PgConnection::establish(conn_info).context("Unable to connect to database")?;
        tracing::info!(?id_strategy, "connected");
        Ok(Self::from_connection(conn, id_strategy))
    }

    pub fn from_connection(conn: PgConnection, id_strategy: IdStrategy) -> Self {
        Self {
            conn: Some(conn),
            id_strategy,
        }
    }

    pub fn conn(&self) -> anyhow::Result<&PgConnection> {
        match &self.conn {
            Some(conn) => Ok(conn),
            None => bail!("Connection is closed"),
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Runs a statement that returns no rows.
    pub fn execute_update(&self, sql: &str) -> anyhow::Result<()> {
        tracing::debug!(sql, "execute_update");
        diesel::sql_query(sql)
            .execute(self.conn()?)
            .context("DB error")?;
        Ok(())
    }

    /// Runs a query and returns every row as its columns rendered to text,
    /// in select-list order. NULL becomes an empty string.
    ///
    /// Rows are split with `json_each_text` over the `json` row value, which
    /// keeps repeated column names and each value's own text form.
    pub fn execute_query_rows(&self, sql: &str) -> anyhow::Result<Vec<Vec<String>>> {
        let wrapped = format!(
            "SELECT array_agg(c.value ORDER BY c.n) AS cells \
             FROM (SELECT row_number() OVER () AS r, row_to_json(q) AS j FROM ({}) q) t \
             CROSS JOIN LATERAL json_each_text(t.j) WITH ORDINALITY AS c(key, value, n) \
             GROUP BY t.r \
             ORDER BY t.r",
            strip_terminator(sql)
        );
        tracing::debug!(sql = wrapped.as_str(), "execute_query_rows");
        let rows = diesel::sql_query(wrapped)
            .load::<RowCells>(self.conn()?)
            .context("DB error")?;
        Ok(rows.into_iter().map(|row| cells_to_strings(row.cells)).collect())
    }

    /// 1 if the query yields at least one row, 0 otherwise. Not a row count.
    pub fn execute_query_count(&self, sql: &str) -> anyhow::Result<i32> {
        let wrapped = format!("SELECT EXISTS ({}) AS present", strip_terminator(sql));
        tracing::debug!(sql = wrapped.as_str(), "execute_query_count");
        let presence = diesel::sql_query(wrapped)
            .get_result::<Presence>(self.conn()?)
            .context("DB error")?;
        Ok(if presence.present { 1 } else { 0 })
    }

    /// `currval` of the named sequence in this session, or -1 when the query
    /// yields nothing.
    pub fn get_last_sequence_value(&self, name: &str) -> anyhow::Result<i64> {
        tracing::debug!(sequence = name, "currval");
        let value = diesel::sql_query("SELECT currval($1::regclass) AS value")
            .bind::<Text, _>(name)
            .get_result::<SequenceValue>(self.conn()?)
            .optional()
            .context("DB error")?;
        Ok(value.map_or(-1, |v| v.value))
    }

    /// Drops the connection if still open. Never fails.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            tracing::info!("disconnected");
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

fn strip_terminator(sql: &str) -> &str {
    sql.trim().trim_end_matches(';').trim_end()
}

fn cells_to_strings(cells: Vec<Option<String>>) -> Vec<String> {
    cells.into_iter().map(Option::unwrap_or_default).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_semicolons() {
        assert_eq!(strip_terminator("SELECT 1;\n"), "SELECT 1");
        assert_eq!(strip_terminator("  SELECT 1 ; ; "), "SELECT 1 ;");
        assert_eq!(strip_terminator("SELECT 1"), "SELECT 1");
    }

    #[test]
    fn null_cells_become_empty_strings() {
        let row = cells_to_strings(vec![Some("1".to_string()), None, Some("x".to_string())]);
        assert_eq!(row, vec!["1", "", "x"]);
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn primitives_against_database() {
        let session = testing::test_session(IdStrategy::Max);
        session
            .execute_update("INSERT INTO Department (dept_ID, name) VALUES (40, 'Radiology')")
            .unwrap();

        let rows = session
            .execute_query_rows("SELECT dept_ID, name FROM Department WHERE dept_ID = 40;")
            .unwrap();
        assert_eq!(rows, vec![vec!["40".to_string(), "Radiology".to_string()]]);

        assert_eq!(
            session
                .execute_query_count("SELECT * FROM Department WHERE dept_ID >= 40")
                .unwrap(),
            1
        );
        assert_eq!(
            session
                .execute_query_count("SELECT * FROM Department WHERE dept_ID < -100")
                .unwrap(),
            0
        );
        assert!(session.execute_update("INSERT INTO Nowhere VALUES (1)").is_err());
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn rows_keep_every_column_as_text() {
        let session = testing::test_session(IdStrategy::Max);

        let rows = session.execute_query_rows("SELECT 1, 2").unwrap();
        assert_eq!(rows, vec![vec!["1", "2"]]);

        let rows = session.execute_query_rows("SELECT 1 AS a, 2 AS a, 3").unwrap();
        assert_eq!(rows, vec![vec!["1", "2", "3"]]);

        let rows = session
            .execute_query_rows("SELECT 12345678901234567890.123456789::numeric, NULL::text, true")
            .unwrap();
        assert_eq!(rows, vec![vec!["12345678901234567890.123456789", "", "true"]]);

        let rows = session
            .execute_query_rows("SELECT n, 'row ' || n FROM generate_series(3, 1, -1) n")
            .unwrap();
        assert_eq!(
            rows,
            vec![vec!["3", "row 3"], vec!["2", "row 2"], vec!["1", "row 1"]]
        );
        assert!(session.execute_query_rows("SELECT 1 WHERE false").unwrap().is_empty());
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn closed_session_refuses_statements() {
        let mut session = testing::test_session(IdStrategy::Max);
        session.close();
        session.close();
        assert!(!session.is_open());
        assert!(session.execute_query_rows("SELECT 1").is_err());
    }
}

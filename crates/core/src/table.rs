//! Editable, sortable table used by the dynamic-tables practice topic.
//!
//! Every mutation is echoed into a small [`ActivityFeed`] so the page can show
//! what the learner just did.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowStatus {
    Active,
    Inactive,
}

impl RowStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Active => "Active",
            RowStatus::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            RowStatus::Active => RowStatus::Inactive,
            RowStatus::Inactive => RowStatus::Active,
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowStatus {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(RowStatus::Active),
            "Inactive" => Ok(RowStatus::Inactive),
            other => Err(TableError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: RowStatus,
    pub role: String,
}

impl TableRow {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        status: RowStatus,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status,
            role: role.into(),
        }
    }

    #[must_use]
    pub fn cell(&self, column: TableColumn) -> &str {
        match column {
            TableColumn::Id => &self.id,
            TableColumn::Name => &self.name,
            TableColumn::Email => &self.email,
            TableColumn::Status => self.status.as_str(),
            TableColumn::Role => &self.role,
        }
    }
}

/// Rows the tables topic starts with.
#[must_use]
pub fn sample_rows() -> Vec<TableRow> {
    vec![
        TableRow::new("1", "Omar Alaa", "omar.qa@example.com", RowStatus::Active, "QA Engineer"),
        TableRow::new(
            "2",
            "Mona Saed",
            "mona.tester@example.com",
            RowStatus::Active,
            "Automation Tester",
        ),
        TableRow::new(
            "3",
            "Quality Sensei",
            "quality.dev@example.com",
            RowStatus::Inactive,
            "Software Developer",
        ),
        TableRow::new(
            "4",
            "Sensei Glitch",
            "glitch.qa@example.com",
            RowStatus::Active,
            "Test Automation Ninja",
        ),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableColumn {
    Id,
    Name,
    Email,
    Status,
    Role,
}

impl TableColumn {
    pub const ALL: [TableColumn; 5] = [
        TableColumn::Id,
        TableColumn::Name,
        TableColumn::Email,
        TableColumn::Status,
        TableColumn::Role,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TableColumn::Id => "id",
            TableColumn::Name => "name",
            TableColumn::Email => "email",
            TableColumn::Status => "status",
            TableColumn::Role => "role",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TableColumn::Id => "Id",
            TableColumn::Name => "Name",
            TableColumn::Email => "Email",
            TableColumn::Status => "Status",
            TableColumn::Role => "Role",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub column: Option<TableColumn>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Clicking the ascending column flips it; any other click sorts ascending.
    #[must_use]
    pub fn next_for(self, column: TableColumn) -> Self {
        let direction = if self.column == Some(column) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            column: Some(column),
            direction,
        }
    }
}

/// Most-recent-first log of table mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityFeed {
    entries: Vec<Action>,
    next_seq: u64,
}

impl ActivityFeed {
    pub const CAPACITY: usize = 5;

    pub fn record(&mut self, description: impl Into<String>, now: DateTime<Utc>) {
        self.next_seq += 1;
        let entry = Action::completed(self.next_seq.to_string(), description, now);
        self.entries.insert(0, entry);
        self.entries.truncate(Self::CAPACITY);
    }

    #[must_use]
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("no row with id {id}")]
    UnknownRow { id: String },

    #[error("column {column} is read-only")]
    ReadOnlyColumn { column: &'static str },

    #[error("invalid status: {value}")]
    InvalidStatus { value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicTable {
    rows: Vec<TableRow>,
    sort: SortConfig,
    activity: ActivityFeed,
}

impl DynamicTable {
    #[must_use]
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            sort: SortConfig::default(),
            activity: ActivityFeed::default(),
        }
    }

    #[must_use]
    pub fn with_sample_rows() -> Self {
        Self::new(sample_rows())
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityFeed {
        &self.activity
    }

    /// Sorts rows by `column` using case-insensitive comparison and returns the
    /// direction that was applied.
    pub fn sort_by(&mut self, column: TableColumn, now: DateTime<Utc>) -> SortDirection {
        self.sort = self.sort.next_for(column);
        let direction = self.sort.direction;
        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(a.cell(column), b.cell(column));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        self.activity.record(
            format!("Sorted by {} ({})", column.key(), direction.as_str()),
            now,
        );
        direction
    }

    /// Replaces one cell.
    ///
    /// # Errors
    ///
    /// Returns `TableError::ReadOnlyColumn` for the id column,
    /// `TableError::InvalidStatus` for an unknown status, and
    /// `TableError::UnknownRow` if no row has `id`.
    pub fn edit(
        &mut self,
        id: &str,
        column: TableColumn,
        value: &str,
        now: DateTime<Utc>,
    ) -> Result<(), TableError> {
        if column == TableColumn::Id {
            return Err(TableError::ReadOnlyColumn { column: column.key() });
        }
        let status = if column == TableColumn::Status {
            Some(value.parse::<RowStatus>()?)
        } else {
            None
        };
        let row = self.row_mut(id)?;
        match column {
            TableColumn::Name => row.name = value.to_string(),
            TableColumn::Email => row.email = value.to_string(),
            TableColumn::Role => row.role = value.to_string(),
            TableColumn::Status => {
                if let Some(status) = status {
                    row.status = status;
                }
            }
            TableColumn::Id => {}
        }
        self.activity
            .record(format!("Edited {} for {id}", column.key()), now);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TableError::UnknownRow` if no row has `id`.
    pub fn set_status(
        &mut self,
        id: &str,
        status: RowStatus,
        now: DateTime<Utc>,
    ) -> Result<(), TableError> {
        self.row_mut(id)?.status = status;
        self.activity
            .record(format!("Updated status for {id} to {status}"), now);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TableError::UnknownRow` if no row has `id`.
    pub fn delete(&mut self, id: &str, now: DateTime<Utc>) -> Result<TableRow, TableError> {
        let index = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| TableError::UnknownRow { id: id.to_string() })?;
        let removed = self.rows.remove(index);
        self.activity.record(format!("Deleted row {id}"), now);
        Ok(removed)
    }

    /// Rows where any cell contains `query`, ignoring case. Blank queries match everything.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&TableRow> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| {
                TableColumn::ALL
                    .into_iter()
                    .any(|column| row.cell(column).to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn row_mut(&mut self, id: &str) -> Result<&mut TableRow, TableError> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| TableError::UnknownRow { id: id.to_string() })
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn names(table: &DynamicTable) -> Vec<&str> {
        table.rows().iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn sorting_same_column_toggles_direction() {
        let mut table = DynamicTable::with_sample_rows();

        assert_eq!(table.sort_by(TableColumn::Name, fixed_now()), SortDirection::Asc);
        assert_eq!(
            names(&table),
            ["Mona Saed", "Omar Alaa", "Quality Sensei", "Sensei Glitch"]
        );

        assert_eq!(table.sort_by(TableColumn::Name, fixed_now()), SortDirection::Desc);
        assert_eq!(
            names(&table),
            ["Sensei Glitch", "Quality Sensei", "Omar Alaa", "Mona Saed"]
        );

        assert_eq!(table.sort_by(TableColumn::Role, fixed_now()), SortDirection::Asc);
        assert_eq!(table.sort_config().column, Some(TableColumn::Role));
    }

    #[test]
    fn sort_ignores_case() {
        let mut table = DynamicTable::new(vec![
            TableRow::new("1", "bravo", "b@x", RowStatus::Active, "r"),
            TableRow::new("2", "Alpha", "a@x", RowStatus::Active, "r"),
            TableRow::new("3", "charlie", "c@x", RowStatus::Active, "r"),
        ]);
        table.sort_by(TableColumn::Name, fixed_now());
        assert_eq!(names(&table), ["Alpha", "bravo", "charlie"]);
    }

    #[test]
    fn edit_rejects_id_column_and_bad_status() {
        let mut table = DynamicTable::with_sample_rows();
        assert_eq!(
            table.edit("1", TableColumn::Id, "9", fixed_now()),
            Err(TableError::ReadOnlyColumn { column: "id" })
        );
        assert_eq!(
            table.edit("1", TableColumn::Status, "Sleeping", fixed_now()),
            Err(TableError::InvalidStatus {
                value: "Sleeping".into()
            })
        );
        assert!(table.activity().entries().is_empty());

        table
            .edit("2", TableColumn::Email, "mona@example.com", fixed_now())
            .unwrap();
        assert_eq!(table.rows()[1].email, "mona@example.com");
        assert_eq!(table.activity().entries()[0].description(), "Edited email for 2");
    }

    #[test]
    fn delete_and_status_changes_are_logged_newest_first() {
        let mut table = DynamicTable::with_sample_rows();
        table.set_status("1", RowStatus::Inactive, fixed_now()).unwrap();
        let removed = table.delete("3", fixed_now()).unwrap();
        assert_eq!(removed.name, "Quality Sensei");
        assert_eq!(table.rows().len(), 3);

        let feed: Vec<_> = table
            .activity()
            .entries()
            .iter()
            .map(Action::description)
            .collect();
        assert_eq!(feed, ["Deleted row 3", "Updated status for 1 to Inactive"]);

        assert_eq!(
            table.delete("3", fixed_now()),
            Err(TableError::UnknownRow { id: "3".into() })
        );
    }

    #[test]
    fn activity_feed_keeps_five_entries() {
        let mut table = DynamicTable::with_sample_rows();
        for _ in 0..7 {
            table.sort_by(TableColumn::Email, fixed_now());
        }
        let entries = table.activity().entries();
        assert_eq!(entries.len(), ActivityFeed::CAPACITY);
        assert_eq!(entries[0].id(), "7");
        assert_eq!(entries[4].id(), "3");
    }

    #[test]
    fn filter_matches_any_cell_case_insensitively() {
        let table = DynamicTable::with_sample_rows();
        let hits = table.filter("SENSEI");
        assert_eq!(hits.len(), 2);
        assert_eq!(table.filter("inactive").len(), 1);
        assert_eq!(table.filter("  ").len(), 4);
        assert!(table.filter("nobody").is_empty());
    }
}

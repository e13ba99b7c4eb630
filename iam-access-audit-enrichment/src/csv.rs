//! Line-oriented handling of comma-separated inventory files.
//!
//! Splitting is a plain comma split. There is no quoting or escaping
//! support; inventory exports must keep field values free of commas.

/// Header name of the column holding the IAM user name.
pub(crate) const USER_COLUMN: &str = "user";

/// Derived columns appended to every output row, in emission order.
pub(crate) const APPENDED_COLUMNS: [&str; 3] = ["policy_names", "group_names", "role_names"];

/// Split one line into its fields.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Join fields back into one line.
pub(crate) fn join_fields(fields: &[String]) -> String {
    fields.join(",")
}

/// Parsed header row of an inventory file.
#[derive(Debug, Clone)]
pub(crate) struct Header {
    columns: Vec<String>,
}

impl Header {
    pub(crate) fn parse(line: &str) -> Self {
        Self {
            columns: split_fields(line),
        }
    }

    /// Index of a column by exact name match, if present.
    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// The header line with the derived columns appended.
    pub(crate) fn augmented_line(&self) -> String {
        let mut columns = self.columns.clone();
        columns.extend(APPENDED_COLUMNS.iter().map(|column| column.to_string()));
        join_fields(&columns)
    }
}

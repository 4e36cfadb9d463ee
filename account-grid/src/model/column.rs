//! Column descriptors

use super::Field;
use super::FieldAccessor;

/// How a column's values render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    #[default]
    Text,
    Url,
    Phone,
    Currency,
}

/// Static column metadata.
///
/// Columns define how a field renders and whether it takes part in sorting
/// and inline editing. The accessor is resolved when the column is built, so
/// columns are usable in `static` tables.
///
/// # Examples
///
/// ```
/// use account_grid::model::{Column, ColumnType, Field};
///
/// let column = Column::new("Phone", Field::Phone, ColumnType::Phone).editable();
/// assert!(column.editable);
/// assert!(!column.sortable);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Column header text
    pub label: &'static str,
    /// Field the column displays
    pub field: Field,
    /// Render type
    pub kind: ColumnType,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Whether cells accept inline edits
    pub editable: bool,
    /// Field shown as link text for URL columns
    pub label_field: Option<Field>,
    accessor: FieldAccessor,
}

impl Column {
    /// Create a new column for `field`.
    pub const fn new(label: &'static str, field: Field, kind: ColumnType) -> Self {
        Self {
            label,
            field,
            kind,
            sortable: false,
            editable: false,
            label_field: None,
            accessor: field.accessor(),
        }
    }

    /// Make the column sortable.
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column editable.
    pub const fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Show `field` as the link text of a URL column.
    pub const fn label_from(mut self, field: Field) -> Self {
        self.label_field = Some(field);
        self
    }

    /// The accessor resolved for this column's field.
    pub fn accessor(&self) -> FieldAccessor {
        self.accessor
    }
}

/// The account table's columns.
///
/// The name column links to the record and sorts by its link path, not by the
/// name it displays.
pub static ACCOUNT_COLUMNS: [Column; 5] = [
    Column::new("Account Name", Field::NavigationTarget, ColumnType::Url)
        .sortable()
        .label_from(Field::Name),
    Column::new("Account Owner", Field::OwnerName, ColumnType::Text)
        .sortable()
        .editable(),
    Column::new("Phone", Field::Phone, ColumnType::Phone).editable(),
    Column::new("Website", Field::Website, ColumnType::Url).editable(),
    Column::new("Annual Revenue", Field::AnnualRevenue, ColumnType::Currency).editable(),
];

/// Finds the column displaying `field`.
pub fn column_for(columns: &[Column], field: Field) -> Option<&Column> {
    columns.iter().find(|column| column.field == field)
}

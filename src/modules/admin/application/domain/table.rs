// src/modules/admin/application/domain/table.rs

//! Generic data table.
//!
//! A table is a list of typed columns plus optional row callbacks. Rendering
//! produces a serializable `TableView`; invoking a row action hands the full
//! entity to the matching callback and returns whatever command it builds.
//! The table itself never touches the data it renders.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use super::entity::Identified;

pub const ACTIONS_HEADER: &str = "Actions";
pub const EMPTY_STATE_MESSAGE: &str = "No data available";

type Accessor<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;
type Renderer<T> = Box<dyn Fn(&T) -> Cell + Send + Sync>;
type Callback<T, C> = Box<dyn Fn(&T) -> C + Send + Sync>;
type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

//
// ──────────────────────────────────────────────────────────
// Cells
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    /// Long text cut to a number of lines by the client
    Clamped { text: String, lines: u8 },
    Badge { label: String, variant: BadgeVariant },
    /// First few entries of a list; `overflow` is how many were left out
    Tags { items: Vec<String>, overflow: usize },
    Rating { value: u8, max: u8 },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    pub fn clamped(text: impl Into<String>, lines: u8) -> Self {
        Cell::Clamped {
            text: text.into(),
            lines,
        }
    }

    pub fn badge(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Cell::Badge {
            label: label.into(),
            variant,
        }
    }

    pub fn tags(items: &[String], limit: usize) -> Self {
        Cell::Tags {
            items: items.iter().take(limit).cloned().collect(),
            overflow: items.len().saturating_sub(limit),
        }
    }

    pub fn rating(value: u8, max: u8) -> Self {
        Cell::Rating { value, max }
    }
}

//
// ──────────────────────────────────────────────────────────
// Columns
// ──────────────────────────────────────────────────────────
//

pub struct Column<T> {
    key: &'static str,
    label: &'static str,
    value: Accessor<T>,
    render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// `value` returning `None` renders as an empty string.
    pub fn new<F>(key: &'static str, label: &'static str, value: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            key,
            label,
            value: Box::new(value),
            render: None,
        }
    }

    pub fn text<F>(key: &'static str, label: &'static str, value: F) -> Self
    where
        F: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::new(key, label, move |item| Some(value(item).to_string()))
    }

    /// Custom cell renderer; takes precedence over the raw value.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn cell(&self, item: &T) -> Cell {
        match &self.render {
            Some(render) => render(item),
            None => Cell::text((self.value)(item).unwrap_or_default()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Row actions
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    ToggleVisibility,
    Edit,
    Delete,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ToggleVisibility => "toggle-visibility",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown row action {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle-visibility" => Ok(ActionKind::ToggleVisibility),
            "edit" => Ok(ActionKind::Edit),
            "delete" => Ok(ActionKind::Delete),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ActionIcon {
    Eye,
    EyeOff,
    Pencil,
    Trash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RowAction {
    pub action: ActionKind,
    pub icon: ActionIcon,
}

//
// ──────────────────────────────────────────────────────────
// Rendered view
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TableRow {
    pub id: String,
    pub striped: bool,
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    /// Placeholder row spanning every column plus the actions column
    Empty { colspan: usize, message: String },
    Rows { rows: Vec<TableRow> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TableView {
    pub headers: Vec<String>,
    /// Field key of each data column, in header order. The actions column has none.
    pub keys: Vec<String>,
    pub body: TableBody,
}

impl TableView {
    pub fn rows(&self) -> &[TableRow] {
        match &self.body {
            TableBody::Rows { rows } => rows,
            TableBody::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }
}

//
// ──────────────────────────────────────────────────────────
// Table
// ──────────────────────────────────────────────────────────
//

pub struct DataTable<T, C> {
    columns: Vec<Column<T>>,
    on_edit: Option<Callback<T, C>>,
    on_delete: Option<Callback<T, C>>,
    on_toggle_visibility: Option<Callback<T, C>>,
    is_visible: Option<Predicate<T>>,
}

impl<T, C> DataTable<T, C>
where
    T: Identified,
{
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            on_edit: None,
            on_delete: None,
            on_toggle_visibility: None,
            is_visible: None,
        }
    }

    pub fn on_edit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) -> C + Send + Sync + 'static,
    {
        self.on_edit = Some(Box::new(callback));
        self
    }

    pub fn on_delete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) -> C + Send + Sync + 'static,
    {
        self.on_delete = Some(Box::new(callback));
        self
    }

    /// Only shown when `is_visible` is supplied as well.
    pub fn on_toggle_visibility<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) -> C + Send + Sync + 'static,
    {
        self.on_toggle_visibility = Some(Box::new(callback));
        self
    }

    pub fn is_visible<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.is_visible = Some(Box::new(predicate));
        self
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|col| col.label().to_string())
            .chain(std::iter::once(ACTIONS_HEADER.to_string()))
            .collect()
    }

    pub fn keys(&self) -> Vec<String> {
        self.columns().iter().map(|col| col.key().to_string()).collect()
    }

    pub fn render<'a, I>(&self, items: I) -> TableView
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let rows: Vec<TableRow> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| TableRow {
                id: item.id().to_string(),
                striped: index % 2 == 1,
                cells: self.columns.iter().map(|col| col.cell(item)).collect(),
                actions: self.actions(item),
            })
            .collect();

        let body = if rows.is_empty() {
            TableBody::Empty {
                colspan: self.columns.len() + 1,
                message: EMPTY_STATE_MESSAGE.to_string(),
            }
        } else {
            TableBody::Rows { rows }
        };

        TableView {
            headers: self.headers(),
            keys: self.keys(),
            body,
        }
    }

    fn actions(&self, item: &T) -> Vec<RowAction> {
        let mut actions = Vec::with_capacity(3);

        if let (Some(_), Some(is_visible)) = (&self.on_toggle_visibility, &self.is_visible) {
            actions.push(RowAction {
                action: ActionKind::ToggleVisibility,
                icon: if is_visible(item) {
                    ActionIcon::Eye
                } else {
                    ActionIcon::EyeOff
                },
            });
        }
        if self.on_edit.is_some() {
            actions.push(RowAction {
                action: ActionKind::Edit,
                icon: ActionIcon::Pencil,
            });
        }
        if self.on_delete.is_some() {
            actions.push(RowAction {
                action: ActionKind::Delete,
                icon: ActionIcon::Trash,
            });
        }

        actions
    }

    /// Runs the callback behind `action` for `item`.
    /// `None` when the table does not offer that action.
    pub fn dispatch(&self, item: &T, action: ActionKind) -> Option<C> {
        match action {
            ActionKind::Edit => self.on_edit.as_ref().map(|cb| cb(item)),
            ActionKind::Delete => self.on_delete.as_ref().map(|cb| cb(item)),
            ActionKind::ToggleVisibility => match (&self.on_toggle_visibility, &self.is_visible) {
                (Some(cb), Some(_)) => Some(cb(item)),
                _ => None,
            },
        }
    }
}

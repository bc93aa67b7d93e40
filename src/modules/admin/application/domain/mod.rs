pub mod entity;
pub mod form;
pub mod list_codec;
pub mod notification;
pub mod page;
pub mod search;
pub mod store;
pub mod table;

pub use entity::{AdminEntity, Identified, RowCommand};
pub use form::{optional, parse_month, required, slugify, FormContext, FormError};
pub use list_codec::{ListCodec, ListCodecError};
pub use notification::{Notification, NotificationLevel};
pub use page::{AdminPage, PageError, PageMode, Saved};
pub use store::EntityStore;
pub use table::{
    ActionIcon, ActionKind, BadgeVariant, Cell, Column, DataTable, RowAction, TableBody, TableRow,
    TableView,
};

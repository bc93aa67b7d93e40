use crate::modules::admin::application::domain::AdminEntity;

/// Initial dataset a page is seeded with when it opens.
///
/// Every call hands out a fresh copy; pages never share their lists.
pub trait SeedSource<E: AdminEntity>: Send + Sync {
    fn seed(&self) -> Vec<E>;
}

use std::sync::Arc;

use typed_builder::TypedBuilder;

use super::Database;

/// sea-orm backed repository. Writes go through immediately, so
/// `save_changed` has nothing to commit and returns `Ok(true)`.
#[derive(Clone, TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
}

use sea_orm_migration::{sea_orm::Database, *};
mod m20260801_1000_create_tables;
mod m20260801_1012_add_role_context;
pub struct Migrator;
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_1000_create_tables::Migration),
            Box::new(m20260801_1012_add_role_context::Migration),
        ]
    }
}

impl Migrator {
    pub async fn migration_up(db_con: &str) {
        if let Err(e) = Migrator::up(&Database::connect(db_con).await.unwrap(), None).await {
            eprintln!("{}", e);
        }
    }
    pub async fn migration_down(db_con: &str) {
        if let Err(e) = Migrator::down(&Database::connect(db_con).await.unwrap(), None).await {
            eprintln!("{}", e);
        }
    }
}

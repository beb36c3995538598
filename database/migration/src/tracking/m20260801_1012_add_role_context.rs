use database_model::tracking::prelude::*;
use sea_orm_migration::prelude::*;

/// One-time backfill of the role context: every existing technician gets
/// `current_role` set to its primary role and `allowed_roles` holding that
/// single role.
pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260801_1012_add_role_context"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                sea_query::Table::alter()
                    .table(TechnicianEntity)
                    .add_column(
                        ColumnDef::new(TechnicianColumn::CurrentRole)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                sea_query::Table::alter()
                    .table(TechnicianEntity)
                    .add_column(
                        ColumnDef::new(TechnicianColumn::AllowedRoles)
                            .json()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared(
                "UPDATE technician SET current_role = role, allowed_roles = json_build_array(role)",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                sea_query::Table::alter()
                    .table(TechnicianEntity)
                    .drop_column(TechnicianColumn::CurrentRole)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                sea_query::Table::alter()
                    .table(TechnicianEntity)
                    .drop_column(TechnicianColumn::AllowedRoles)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

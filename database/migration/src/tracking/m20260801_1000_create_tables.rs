use database_model::tracking::prelude::*;
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260801_1000_create_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                sea_query::Table::create()
                    .table(TechnicianEntity)
                    .if_not_exists()
                    .col(ColumnDef::new(TechnicianColumn::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(TechnicianColumn::EmployeeId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TechnicianColumn::Name).string().not_null())
                    .col(ColumnDef::new(TechnicianColumn::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(TechnicianColumn::PasswordHash).string().not_null())
                    .col(ColumnDef::new(TechnicianColumn::Role).integer().not_null())
                    .col(ColumnDef::new(TechnicianColumn::Department).string().not_null())
                    .col(ColumnDef::new(TechnicianColumn::Specialization).string())
                    .col(ColumnDef::new(TechnicianColumn::IsActive).boolean().not_null())
                    .col(
                        ColumnDef::new(TechnicianColumn::TotalTasksCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TechnicianColumn::AverageProductivity)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TechnicianColumn::AverageEfficiency)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TechnicianColumn::UtilizationRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(TechnicianColumn::CreatedTime).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                sea_query::Table::create()
                    .table(JobOrderEntity)
                    .if_not_exists()
                    .col(ColumnDef::new(JobOrderColumn::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(JobOrderColumn::JobNumber).string().not_null().unique_key(),
                    )
                    .col(ColumnDef::new(JobOrderColumn::DeviceType).string().not_null())
                    .col(ColumnDef::new(JobOrderColumn::DeviceModel).string().not_null())
                    .col(ColumnDef::new(JobOrderColumn::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(JobOrderColumn::CompletedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(JobOrderColumn::DueDate).date_time().not_null())
                    .col(ColumnDef::new(JobOrderColumn::Priority).integer().not_null())
                    .col(ColumnDef::new(JobOrderColumn::Status).integer().not_null())
                    .col(ColumnDef::new(JobOrderColumn::AssigneeId).uuid())
                    .col(ColumnDef::new(JobOrderColumn::CreatedTime).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                sea_query::Table::create()
                    .table(TaskEntity)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskColumn::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TaskColumn::TechnicianId).uuid().not_null())
                    .col(ColumnDef::new(TaskColumn::JobOrderId).uuid().not_null())
                    .col(ColumnDef::new(TaskColumn::StartTime).date_time().not_null())
                    .col(ColumnDef::new(TaskColumn::EndTime).date_time())
                    .col(
                        ColumnDef::new(TaskColumn::UnitsCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TaskColumn::SerialNumbers).json().not_null())
                    .col(ColumnDef::new(TaskColumn::Status).integer().not_null())
                    .col(ColumnDef::new(TaskColumn::Review).integer().not_null())
                    .col(ColumnDef::new(TaskColumn::ReviewedBy).uuid())
                    .col(ColumnDef::new(TaskColumn::ReviewNote).text())
                    .col(ColumnDef::new(TaskColumn::Efficiency).double().not_null().default(0.0))
                    .col(ColumnDef::new(TaskColumn::Notes).text())
                    .col(ColumnDef::new(TaskColumn::Issues).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_Task_Technician")
                    .from(TaskEntity, TaskColumn::TechnicianId)
                    .to(TechnicianEntity, TechnicianColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_Task_JobOrder")
                    .from(TaskEntity, TaskColumn::JobOrderId)
                    .to(JobOrderEntity, JobOrderColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                sea_query::Table::create()
                    .table(NotificationEntity)
                    .if_not_exists()
                    .col(ColumnDef::new(NotificationColumn::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(NotificationColumn::Title).string().not_null())
                    .col(ColumnDef::new(NotificationColumn::Content).text().not_null())
                    .col(ColumnDef::new(NotificationColumn::Type).integer().not_null())
                    .col(ColumnDef::new(NotificationColumn::Priority).integer().not_null())
                    .col(
                        ColumnDef::new(NotificationColumn::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(NotificationColumn::RelatedItemId).uuid().not_null())
                    .col(ColumnDef::new(NotificationColumn::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(NotificationColumn::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(NotificationColumn::CreatedTime).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                sea_query::ForeignKey::drop().name("FK_Task_Technician").table(TaskEntity).to_owned(),
            )
            .await?;
        manager
            .drop_foreign_key(
                sea_query::ForeignKey::drop().name("FK_Task_JobOrder").table(TaskEntity).to_owned(),
            )
            .await?;
        let stmts = vec![
            Table::drop().table(NotificationEntity).if_exists().to_owned(),
            Table::drop().table(TaskEntity).if_exists().to_owned(),
            Table::drop().table(JobOrderEntity).if_exists().to_owned(),
            Table::drop().table(TechnicianEntity).if_exists().to_owned(),
        ];
        for stmt in stmts {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}

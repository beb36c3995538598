use database_model::tracking::prelude::*;
use domain_tracking::{
    model::{
        entity::{technician::Role, Technician},
        vo::metrics::PerformanceSnapshot,
    },
    repository::{
        DBRepository, MutableRepository, ReadOnlyRepository, TechnicianRepo,
    },
};
use sea_orm::{
    prelude::*, sea_query::Expr, ActiveValue::Set, Condition, QueryOrder,
};

use crate::infrastructure::database::OrmRepo;

fn to_active_model(entity: &Technician) -> TechnicianActiveModel {
    TechnicianActiveModel {
        id: Set(entity.id),
        employee_id: Set(entity.employee_id.clone()),
        name: Set(entity.name.clone()),
        email: Set(entity.email.clone()),
        password_hash: Set(entity.password_hash.clone()),
        role: Set(entity.role as i32),
        current_role: Set(entity.current_role as i32),
        allowed_roles: Set(serde_json::json!(entity
            .allowed_roles
            .iter()
            .map(|role| *role as i32)
            .collect::<Vec<_>>())),
        department: Set(entity.department.clone()),
        specialization: Set(entity.specialization.clone()),
        is_active: Set(entity.is_active),
        total_tasks_completed: Set(entity.metrics.total_tasks_completed),
        average_productivity: Set(entity.metrics.average_productivity),
        average_efficiency: Set(entity.metrics.average_efficiency),
        utilization_rate: Set(entity.metrics.utilization_rate),
        created_time: Set(entity.created_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Technician> for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Technician> {
        TechnicianEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow::anyhow!("There is no such technician with id: {id}"))?
            .try_into()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Technician>> {
        TechnicianEntity::find()
            .order_by_asc(TechnicianColumn::EmployeeId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Technician> for OrmRepo {
    async fn insert(&self, entity: Technician) -> anyhow::Result<Technician> {
        to_active_model(&entity).insert(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn update(&self, entity: Technician) -> anyhow::Result<Technician> {
        to_active_model(&entity).update(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(TechnicianEntity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

impl DBRepository<Technician> for OrmRepo {}

#[async_trait::async_trait]
impl TechnicianRepo for OrmRepo {
    async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<Technician>> {
        TechnicianEntity::find()
            .filter(TechnicianColumn::Email.eq(email))
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_by_employee_id(&self, employee_id: &str) -> anyhow::Result<Option<Technician>> {
        TechnicianEntity::find()
            .filter(TechnicianColumn::EmployeeId.eq(employee_id))
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_active(&self) -> anyhow::Result<Vec<Technician>> {
        TechnicianEntity::find()
            .filter(TechnicianColumn::IsActive.eq(true))
            .order_by_asc(TechnicianColumn::EmployeeId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_supervisors(&self, department: &str) -> anyhow::Result<Vec<Technician>> {
        TechnicianEntity::find()
            .filter(TechnicianColumn::Department.eq(department))
            .filter(TechnicianColumn::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(TechnicianColumn::Role.eq(Role::Supervisor as i32))
                    .add(TechnicianColumn::CurrentRole.eq(Role::Supervisor as i32)),
            )
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn update_snapshot(
        &self,
        id: Uuid,
        snapshot: PerformanceSnapshot,
    ) -> anyhow::Result<()> {
        TechnicianEntity::update_many()
            .col_expr(
                TechnicianColumn::TotalTasksCompleted,
                Expr::value(snapshot.total_tasks_completed),
            )
            .col_expr(
                TechnicianColumn::AverageProductivity,
                Expr::value(snapshot.average_productivity),
            )
            .col_expr(
                TechnicianColumn::AverageEfficiency,
                Expr::value(snapshot.average_efficiency),
            )
            .col_expr(
                TechnicianColumn::UtilizationRate,
                Expr::value(snapshot.utilization_rate),
            )
            .filter(TechnicianColumn::Id.eq(id))
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }
}

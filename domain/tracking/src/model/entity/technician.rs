use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::metrics::PerformanceSnapshot;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub current_role: Role,
    pub allowed_roles: Vec<Role>,
    pub department: String,
    pub specialization: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub metrics: PerformanceSnapshot,
    pub created_time: DateTime<Utc>,
}

impl Technician {
    pub fn may_act_as(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Technician,
    Supervisor,
    Planner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::Technician => "technician",
            Role::Supervisor => "supervisor",
            Role::Planner => "planner",
        })
    }
}

impl TryFrom<database_model::tracking::prelude::TechnicianModel> for Technician {
    type Error = anyhow::Error;

    fn try_from(
        model: database_model::tracking::prelude::TechnicianModel,
    ) -> Result<Self, Self::Error> {
        use num_traits::FromPrimitive;

        let role = Role::from_i32(model.role)
            .ok_or(anyhow::anyhow!("Unknown role code: {}", model.role))?;
        let current_role = Role::from_i32(model.current_role)
            .ok_or(anyhow::anyhow!("Unknown role code: {}", model.current_role))?;
        let allowed_roles = serde_json::from_value::<Vec<i32>>(model.allowed_roles)?
            .into_iter()
            .map(|code| Role::from_i32(code).ok_or(anyhow::anyhow!("Unknown role code: {code}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: model.id,
            employee_id: model.employee_id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            current_role,
            allowed_roles,
            department: model.department,
            specialization: model.specialization,
            is_active: model.is_active,
            metrics: PerformanceSnapshot {
                total_tasks_completed: model.total_tasks_completed,
                average_productivity: model.average_productivity,
                average_efficiency: model.average_efficiency,
                utilization_rate: model.utilization_rate,
            },
            created_time: model.created_time,
        })
    }
}

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use domain_tracking::{
    command::{LoginCommand, RegisterTechnicianCommand},
    exception::{TrackingException, TrackingResult},
    model::{
        entity::{technician::Role, Technician},
        vo::auth::{AuthToken, Claims},
    },
    repository::TechnicianRepo,
    service::AuthService,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AuthServiceImpl {
    technician_repo: Arc<dyn TechnicianRepo>,
    jwt_secret: String,
    #[builder(default = 24)]
    token_exp_hours: i64,
}

impl AuthServiceImpl {
    fn hash_password(password: &str) -> TrackingResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Unable to hash password: {e}"))?;
        Ok(hash.to_string())
    }

    fn verify_password(hash: &str, password: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
            })
            .unwrap_or(false)
    }

    fn issue_token(&self, technician: &Technician) -> TrackingResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: technician.id,
            email: technician.email.clone(),
            role: technician.current_role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_exp_hours)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| anyhow::anyhow!("Unable to sign token: {e}"))?;
        Ok(token)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, cmd: RegisterTechnicianCommand) -> TrackingResult<Technician> {
        if self.technician_repo.get_by_email(&cmd.email).await?.is_some() {
            return Err(TrackingException::DuplicateEmail { email: cmd.email });
        }
        if self.technician_repo.get_by_employee_id(&cmd.employee_id).await?.is_some() {
            return Err(TrackingException::DuplicateEmployeeId {
                employee_id: cmd.employee_id,
            });
        }

        let mut allowed_roles = cmd.allowed_roles;
        if !allowed_roles.contains(&cmd.role) {
            allowed_roles.insert(0, cmd.role);
        }

        let technician = Technician {
            id: Uuid::new_v4(),
            employee_id: cmd.employee_id,
            name: cmd.name,
            email: cmd.email,
            password_hash: Self::hash_password(&cmd.password)?,
            role: cmd.role,
            current_role: cmd.role,
            allowed_roles,
            department: cmd.department,
            specialization: cmd.specialization,
            is_active: true,
            metrics: Default::default(),
            created_time: Utc::now(),
        };
        let technician = self.technician_repo.insert(technician).await?;
        self.technician_repo.save_changed().await?;
        tracing::info!(id = %technician.id, "Registered technician.");
        Ok(technician)
    }

    async fn login(&self, cmd: LoginCommand) -> TrackingResult<AuthToken> {
        let technician = self
            .technician_repo
            .get_by_email(&cmd.email)
            .await?
            .ok_or(TrackingException::InvalidCredentials)?;
        // Deactivated accounts keep their history but can no longer sign in.
        if !technician.is_active {
            return Err(TrackingException::InvalidCredentials);
        }
        if !Self::verify_password(&technician.password_hash, &cmd.password) {
            return Err(TrackingException::InvalidCredentials);
        }
        let token = self.issue_token(&technician)?;
        Ok(AuthToken { token, technician })
    }

    async fn profile(&self, user_id: Uuid) -> TrackingResult<Technician> {
        self.technician_repo.get_by_id(user_id).await.map_err(|_| {
            TrackingException::NotFound {
                entity: "technician",
                id: user_id,
            }
        })
    }

    async fn switch_role(&self, user_id: Uuid, role: Role) -> TrackingResult<AuthToken> {
        let mut technician = self.profile(user_id).await?;
        if !technician.may_act_as(role) {
            return Err(TrackingException::RoleNotAllowed {
                role: role.to_string(),
            });
        }
        technician.current_role = role;
        let technician = self.technician_repo.update(technician).await?;
        self.technician_repo.save_changed().await?;
        let token = self.issue_token(&technician)?;
        Ok(AuthToken { token, technician })
    }
}

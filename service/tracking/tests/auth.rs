use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use domain_tracking::{
    command::{LoginCommand, RegisterTechnicianCommand},
    exception::TrackingException,
    mock::MockTechnicianRepo,
    model::{
        entity::{technician::Role, Technician},
        vo::auth::Claims,
    },
    service::AuthService,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use service_tracking::AuthServiceImpl;
use uuid::Uuid;

const SECRET: &str = "test-secret";

fn service(repo: MockTechnicianRepo) -> AuthServiceImpl {
    AuthServiceImpl::builder()
        .technician_repo(Arc::new(repo))
        .jwt_secret(SECRET.to_string())
        .build()
}

fn technician_with_password(password: &str) -> Technician {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt).unwrap();
    Technician {
        id: Uuid::new_v4(),
        employee_id: "T-001".to_string(),
        name: "Dana Fields".to_string(),
        email: "dana@example.com".to_string(),
        password_hash: hash.to_string(),
        role: Role::Technician,
        current_role: Role::Technician,
        allowed_roles: vec![Role::Technician],
        department: "assembly".to_string(),
        is_active: true,
        created_time: Utc::now(),
        ..Technician::default()
    }
}

fn register_command() -> RegisterTechnicianCommand {
    RegisterTechnicianCommand {
        employee_id: "T-002".to_string(),
        name: "Sam Ortiz".to_string(),
        email: "sam@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
        role: Role::Technician,
        allowed_roles: vec![],
        department: "assembly".to_string(),
        specialization: None,
    }
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_email()
        .return_once(|_| Ok(Some(technician_with_password("irrelevant"))));

    let result = service(repo).register(register_command()).await;
    assert!(matches!(
        result,
        Err(TrackingException::DuplicateEmail { email }) if email == "sam@example.com"
    ));
}

#[tokio::test]
async fn register_hashes_password_and_defaults_allowed_roles() {
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_email().return_once(|_| Ok(None));
    repo.expect_get_by_employee_id().return_once(|_| Ok(None));
    repo.expect_insert().return_once(Ok);
    repo.expect_save_changed().return_once(|| Ok(true));

    let technician = service(repo).register(register_command()).await.unwrap();
    assert_ne!(technician.password_hash, "hunter2hunter2");
    assert!(technician.password_hash.starts_with("$argon2"));
    assert_eq!(technician.allowed_roles, vec![Role::Technician]);
    assert_eq!(technician.current_role, Role::Technician);
    assert!(technician.is_active);
}

#[tokio::test]
async fn login_returns_token_decoding_to_identity() {
    let technician = technician_with_password("correct horse");
    let expected_id = technician.id;
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_email().return_once(move |_| Ok(Some(technician)));

    let auth = service(repo)
        .login(LoginCommand {
            email: "dana@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();

    let claims = decode::<Claims>(
        &auth.token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.sub, expected_id);
    assert_eq!(claims.email, "dana@example.com");
    assert_eq!(claims.role, Role::Technician);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let technician = technician_with_password("correct horse");
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_email().return_once(move |_| Ok(Some(technician)));

    let result = service(repo)
        .login(LoginCommand {
            email: "dana@example.com".to_string(),
            password: "battery staple".to_string(),
        })
        .await;
    assert!(matches!(result, Err(TrackingException::InvalidCredentials)));
}

#[tokio::test]
async fn deactivated_account_cannot_log_in() {
    let mut technician = technician_with_password("correct horse");
    technician.is_active = false;
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_email().return_once(move |_| Ok(Some(technician)));

    let result = service(repo)
        .login(LoginCommand {
            email: "dana@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await;
    assert!(matches!(result, Err(TrackingException::InvalidCredentials)));
}

#[tokio::test]
async fn switch_role_outside_allowed_roles_is_rejected() {
    let technician = technician_with_password("pw");
    let id = technician.id;
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_id().return_once(move |_| Ok(technician));

    let result = service(repo).switch_role(id, Role::Supervisor).await;
    assert!(matches!(
        result,
        Err(TrackingException::RoleNotAllowed { role }) if role == "supervisor"
    ));
}

#[tokio::test]
async fn switch_role_reissues_token_with_new_role() {
    let mut technician = technician_with_password("pw");
    technician.allowed_roles = vec![Role::Technician, Role::Supervisor];
    let id = technician.id;
    let mut repo = MockTechnicianRepo::new();
    repo.expect_get_by_id().return_once(move |_| Ok(technician));
    repo.expect_update().return_once(Ok);
    repo.expect_save_changed().return_once(|| Ok(true));

    let auth = service(repo).switch_role(id, Role::Supervisor).await.unwrap();
    assert_eq!(auth.technician.current_role, Role::Supervisor);

    let claims = decode::<Claims>(
        &auth.token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.role, Role::Supervisor);
}

use super::*;

mod require_owner;
mod require_pro;

/// Tests a multi-role allow list accepts any listed role.
///
/// Verifies that membership is any-of: an endpoint open to both roles
/// grants access to a pro user without owner privileges.
///
/// Expected: Ok(User) with role Pro
#[tokio::test]
async fn allows_any_listed_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .subject("provider|pro-1")
        .role("pro")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Owner, Role::Pro]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().role, Role::Pro);

    Ok(())
}

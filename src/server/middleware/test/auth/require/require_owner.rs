use super::*;

/// Tests owner user successfully passes the owner role check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and holds the owner role.
///
/// Expected: Ok(User) with role Owner
#[tokio::test]
async fn grants_access_to_owner_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create owner user
    let user = factory::user::UserFactory::new(db)
        .subject("provider|owner-1")
        .name("StudioOwner")
        .role("owner")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check owner role
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Owner]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "StudioOwner");
    assert_eq!(returned_user.role, Role::Owner);

    Ok(())
}

/// Tests a pro user is denied access to an owner-only endpoint.
///
/// Verifies that the AuthGuard denies access when the user is authenticated
/// and exists in the database but holds a role outside the allowed set.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_pro_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create pro user
    let user = factory::user::UserFactory::new(db)
        .subject("provider|pro-1")
        .role("pro")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check owner role
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Owner]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("'pro'"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests unauthenticated user is denied the owner role check.
///
/// Verifies that the AuthGuard denies access when there is no user ID
/// in the session (user not logged in).
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Don't set user in session - simulate unauthenticated request

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Owner]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests user in session but not in database is denied.
///
/// Verifies that the AuthGuard denies access when the user ID exists in
/// the session but the account row does not exist in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Set user ID in session without creating user in database
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Owner]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}

use super::*;

/// Tests pro user successfully passes the pro role check.
///
/// Expected: Ok(User) with role Pro
#[tokio::test]
async fn grants_access_to_pro_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .subject("provider|pro-1")
        .name("TrainerPro")
        .role("pro")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Pro]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.name, "TrainerPro");
    assert_eq!(returned_user.role, Role::Pro);

    Ok(())
}

/// Tests an owner user is denied access to a pro-only endpoint.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_owner_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .subject("provider|owner-1")
        .role("owner")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Pro]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a stored role outside the closed role set is rejected.
///
/// Verifies that the guard surfaces an explicit error for an account row
/// whose role column no longer matches any known role, instead of silently
/// failing the membership check.
///
/// Expected: Err(AuthError::InvalidRoleClaim)
#[tokio::test]
async fn rejects_unrecognized_stored_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Insert an account with a role string no release ever issued
    let user = factory::user::UserFactory::new(db)
        .subject("provider|legacy-1")
        .role("coach")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Role::Pro]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidRoleClaim(claim)) => {
            assert_eq!(claim, "coach");
        }
        e => panic!("Expected InvalidRoleClaim error, got: {:?}", e),
    }

    Ok(())
}

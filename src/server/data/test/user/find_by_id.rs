use super::*;

/// Tests finding an existing user by primary key.
///
/// Expected: Ok(Some(User)) with validated role
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .subject("provider|abc123")
        .name("TestUser")
        .role("owner")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.subject, "provider|abc123");
    assert_eq!(user.role, Role::Owner);

    Ok(())
}

/// Tests lookup of a nonexistent account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(424242).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests a stored role outside the closed role set fails conversion.
///
/// Verifies that the repository reports an unrecognized role column value
/// explicitly instead of returning an account with an unchecked role.
///
/// Expected: Err(AuthError::InvalidRoleClaim)
#[tokio::test]
async fn rejects_unrecognized_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .subject("provider|legacy-1")
        .role("coach")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidRoleClaim(claim)) => {
            assert_eq!(claim, "coach");
        }
        e => panic!("Expected InvalidRoleClaim error, got: {:?}", e),
    }

    Ok(())
}

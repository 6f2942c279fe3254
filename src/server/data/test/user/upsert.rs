use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository successfully creates a new account
/// record with the specified subject, name, and role.
///
/// Expected: Ok with user created and role set to Pro
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(UpsertUserParam {
            subject: "provider|abc123".to_string(),
            name: "TestUser".to_string(),
            role: Role::Pro,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.subject, "provider|abc123");
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.role, Role::Pro);

    Ok(())
}

/// Tests updating an existing user on subject conflict.
///
/// Verifies that upserting a subject that already exists updates the display
/// name and role in place instead of creating a second account.
///
/// Expected: Ok with same account ID, updated name and role
#[tokio::test]
async fn updates_existing_user_on_subject_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    // Create initial user
    let original = repo
        .upsert(UpsertUserParam {
            subject: "provider|abc123".to_string(),
            name: "OriginalName".to_string(),
            role: Role::Pro,
        })
        .await?;

    // Same subject signs in again with updated claims
    let result = repo
        .upsert(UpsertUserParam {
            subject: "provider|abc123".to_string(),
            name: "UpdatedName".to_string(),
            role: Role::Owner,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, original.id);
    assert_eq!(user.name, "UpdatedName");
    assert_eq!(user.role, Role::Owner);

    Ok(())
}

/// Tests distinct subjects create distinct accounts.
///
/// Expected: Ok with two accounts holding different IDs
#[tokio::test]
async fn distinct_subjects_create_distinct_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let first = repo
        .upsert(UpsertUserParam {
            subject: "provider|abc123".to_string(),
            name: "First".to_string(),
            role: Role::Owner,
        })
        .await?;
    let second = repo
        .upsert(UpsertUserParam {
            subject: "provider|def456".to_string(),
            name: "Second".to_string(),
            role: Role::Pro,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

use super::*;

/// Tests account counting.
///
/// Expected: Ok(0) on an empty table, Ok(2) after two accounts exist
#[tokio::test]
async fn counts_registered_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::user::UserFactory::new(db).role("owner").build().await?;
    factory::user::UserFactory::new(db).role("pro").build().await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

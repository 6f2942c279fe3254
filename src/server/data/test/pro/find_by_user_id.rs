use super::*;

/// Tests finding the profile linked to an account.
///
/// Expected: Ok(Some(ProProfile)) for the linked account
#[tokio::test]
async fn finds_linked_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("pro").build().await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .name("Linked")
        .user_id(user.id)
        .build()
        .await?;

    let repo = ProRepository::new(db);
    let profile = repo.find_by_user_id(user.id).await?;

    assert!(profile.is_some());
    assert_eq!(profile.unwrap().name, "Linked");

    Ok(())
}

/// Tests lookup for an account without a linked profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_profile_linked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("pro").build().await?;
    // An unlinked profile exists alongside
    factory::pro_profile::ProProfileFactory::new(db).build().await?;

    let repo = ProRepository::new(db);
    let profile = repo.find_by_user_id(user.id).await?;

    assert!(profile.is_none());

    Ok(())
}

use super::*;

/// Tests the owner roster includes unpublished drafts.
///
/// Expected: Ok with both the published and the draft profile
#[tokio::test]
async fn includes_unpublished_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pro_profile::ProProfileFactory::new(db)
        .name("Alex")
        .published(true)
        .build()
        .await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .name("Casey")
        .published(false)
        .build()
        .await?;

    let repo = ProRepository::new(db);
    let profiles = repo.get_all().await?;

    assert_eq!(profiles.len(), 2);
    assert!(profiles.iter().any(|pro| !pro.published));

    Ok(())
}

use super::*;

/// Tests total and published profile counts.
///
/// Expected: count sees every profile, count_published only published ones
#[tokio::test]
async fn counts_total_and_published_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pro_profile::ProProfileFactory::new(db)
        .published(true)
        .build()
        .await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .published(true)
        .build()
        .await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = ProRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.count_published().await?, 2);

    Ok(())
}

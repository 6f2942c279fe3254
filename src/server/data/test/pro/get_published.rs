use super::*;

/// Tests the public listing excludes unpublished profiles.
///
/// Expected: Ok with only the two published profiles
#[tokio::test]
async fn returns_only_published_profiles() -> Result<(), DbErr> {
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
        .name("Brook")
        .published(true)
        .build()
        .await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .name("Casey")
        .published(false)
        .build()
        .await?;

    let repo = ProRepository::new(db);
    let profiles = repo.get_published().await?;

    assert_eq!(profiles.len(), 2);
    assert!(profiles.iter().all(|pro| pro.published));

    Ok(())
}

/// Tests the public listing is ordered alphabetically by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn orders_profiles_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pro_profile::ProProfileFactory::new(db)
        .name("Morgan")
        .build()
        .await?;
    factory::pro_profile::ProProfileFactory::new(db)
        .name("Alex")
        .build()
        .await?;

    let repo = ProRepository::new(db);
    let profiles = repo.get_published().await?;

    let names: Vec<&str> = profiles.iter().map(|pro| pro.name.as_str()).collect();
    assert_eq!(names, vec!["Alex", "Morgan"]);

    Ok(())
}

/// Tests the listing is empty when no profiles exist.
///
/// Expected: Ok with an empty vector, not an error
#[tokio::test]
async fn returns_empty_when_no_profiles_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProRepository::new(db);
    let profiles = repo.get_published().await?;

    assert!(profiles.is_empty());

    Ok(())
}

use super::*;

/// Tests renaming a university.
///
/// Expected: Ok(true) and the new name stored
#[tokio::test]
async fn renames_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;

    let repo = UniversityRepository::new(db);
    let updated = repo
        .update(UpsertUniversityParams {
            id: Some(university.id),
            name: "Renamed".to_string(),
        })
        .await?;

    assert!(updated);
    assert_eq!(repo.get_by_id(university.id).await?.unwrap().name, "Renamed");
    assert_eq!(repo.search("renamed").await?.len(), 1);

    Ok(())
}

/// Tests updating a university that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UniversityRepository::new(db)
        .update(UpsertUniversityParams {
            id: Some(Uuid::new_v4()),
            name: "Ghost".to_string(),
        })
        .await?;

    assert!(!updated);

    Ok(())
}

use super::*;

fn params(id: Option<Uuid>, name: &str) -> UpsertCtfServiceParams {
    UpsertCtfServiceParams {
        id,
        name: name.to_string(),
        author: "organizers".to_string(),
        logo_url: None,
        description: Some("Vulnerable notes app".to_string()),
        is_public: false,
    }
}

/// Tests the create, get, update and delete cycle of a service.
///
/// Expected: each step observes the previous one
#[tokio::test]
async fn runs_full_lifecycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CtfServiceRepository::new(db);
    let service = repo.create(params(None, "notes")).await?;

    assert_eq!(repo.get_by_id(service.id).await?, Some(service.clone()));

    let updated = repo
        .update(UpsertCtfServiceParams {
            is_public: true,
            ..params(Some(service.id), "notes-v2")
        })
        .await?;
    assert!(updated);

    let fetched = repo.get_by_id(service.id).await?.unwrap();
    assert_eq!(fetched.name, "notes-v2");
    assert!(fetched.is_public);

    assert!(repo.delete(service.id).await?);
    assert!(repo.get_by_id(service.id).await?.is_none());

    Ok(())
}

/// Tests listing services ordered by name.
///
/// Expected: Ok(Vec<CtfService>) sorted alphabetically
#[tokio::test]
async fn lists_services_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["wiki", "bank", "forum"] {
        factory::service::ServiceFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let services = CtfServiceRepository::new(db).get_all().await?;
    let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["bank", "forum", "wiki"]);

    Ok(())
}

/// Tests updating and deleting a service that does not exist.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn reports_missing_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CtfServiceRepository::new(db);
    let missing = Uuid::new_v4();

    assert!(!repo.update(params(Some(missing), "ghost")).await?);
    assert!(!repo.delete(missing).await?);

    Ok(())
}

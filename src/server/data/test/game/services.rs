use super::*;

/// Tests creating a game with services and replacing them on update.
///
/// Verifies that `service_ids` is stored sorted, that an update without ids keeps
/// the links and that an update with ids replaces them.
///
/// Expected: the game reports exactly the ids of the latest write that listed them
#[tokio::test]
async fn replaces_services_on_write() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_service(db).await?;
    let b = factory::create_service(db).await?;
    let c = factory::create_service(db).await?;
    let mut initial = vec![a.id, b.id];
    initial.sort();

    let start = Utc::now();
    let repo = GameRepository::new(db);
    let game = repo
        .create(UpsertGameParams {
            id: None,
            start_time: start,
            end_time: start + Duration::hours(8),
            description: None,
            service_ids: Some(initial.clone()),
        })
        .await?;
    assert_eq!(game.service_ids, initial);

    let window = UpsertGameParams {
        id: Some(game.id),
        start_time: start,
        end_time: start + Duration::hours(9),
        description: None,
        service_ids: None,
    };
    assert!(repo.update(window.clone()).await?);
    assert_eq!(repo.get_by_id(game.id).await?.unwrap().service_ids, initial);

    assert!(
        repo.update(UpsertGameParams {
            service_ids: Some(vec![c.id]),
            ..window
        })
        .await?
    );
    assert_eq!(repo.get_by_id(game.id).await?.unwrap().service_ids, vec![c.id]);

    Ok(())
}

/// Tests that an unknown service rolls back the game insert.
///
/// Expected: Err(DbErr) and no game stored
#[tokio::test]
async fn create_with_unknown_service_stores_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let repo = GameRepository::new(db);
    let result = repo
        .create(UpsertGameParams {
            id: None,
            start_time: start,
            end_time: start,
            description: None,
            service_ids: Some(vec![Uuid::new_v4()]),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests attaching, listing and detaching services.
///
/// Verifies that a pair is linked once, that listing is ordered by name and
/// scoped to the game, and that detaching reports whether a link existed.
///
/// Expected: Ok(true) then Ok(false) for both link and unlink
#[tokio::test]
async fn links_and_unlinks_services() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let web = factory::service::ServiceFactory::new(db)
        .name("web")
        .build()
        .await?;
    let crypto = factory::service::ServiceFactory::new(db)
        .name("crypto")
        .build()
        .await?;

    let repo = GameServiceRepository::new(db);
    assert!(repo.link(game.id, web.id).await?);
    assert!(!repo.link(game.id, web.id).await?);
    assert!(repo.link(game.id, crypto.id).await?);
    assert!(repo.link(other_game.id, web.id).await?);

    let names: Vec<String> = repo
        .get_services(game.id)
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["crypto", "web"]);

    assert!(repo.unlink(game.id, web.id).await?);
    assert!(!repo.unlink(game.id, web.id).await?);
    assert_eq!(repo.get_services(game.id).await?.len(), 1);
    assert_eq!(repo.get_services(other_game.id).await?.len(), 1);

    Ok(())
}

/// Tests that deleting a service detaches it from every game.
///
/// Expected: the game keeps no service ids
#[tokio::test]
async fn service_delete_removes_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = factory::create_service(db).await?;
    GameServiceRepository::new(db)
        .link(game.id, service.id)
        .await?;

    entity::prelude::Service::delete_by_id(service.id)
        .exec(db)
        .await?;

    let game = GameRepository::new(db).get_by_id(game.id).await?.unwrap();
    assert!(game.service_ids.is_empty());

    Ok(())
}

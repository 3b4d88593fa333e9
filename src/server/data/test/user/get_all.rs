use super::*;

/// Tests that all users are returned ordered by user name.
///
/// Expected: Ok(Vec<User>) sorted alphabetically
#[tokio::test]
async fn returns_users_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["carol", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .user_name(name)
            .build()
            .await?;
    }

    let users = UserRepository::new(db).get_all().await?;
    let names: Vec<&str> = users.iter().map(|u| u.user_name.as_str()).collect();

    assert_eq!(names, vec!["alice", "bob", "carol"]);

    Ok(())
}

/// Tests listing with no users.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

use super::*;

/// Tests substring search on university names.
///
/// Verifies that matching ignores ASCII case and excludes names without the
/// term.
///
/// Expected: Ok(Vec<University>) with only the matching names
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Moscow State University", "Tomsk Polytechnic", "State College"] {
        factory::university::UniversityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let results = UniversityRepository::new(db).search("state").await?;
    let names: Vec<&str> = results.iter().map(|u| u.name.as_str()).collect();

    assert_eq!(names, vec!["Moscow State University", "State College"]);

    Ok(())
}

/// Tests that search results are capped like the plain listing.
///
/// Expected: Ok(Vec<University>) of `UNIVERSITY_LIST_LIMIT` entries
#[tokio::test]
async fn caps_results_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..12 {
        factory::university::UniversityFactory::new(db)
            .name(format!("Tech {i:02}"))
            .build()
            .await?;
    }

    let results = UniversityRepository::new(db).search("Tech").await?;

    assert_eq!(results.len() as u64, UNIVERSITY_LIST_LIMIT);

    Ok(())
}

/// Tests a search with no matches.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_university(db).await?;

    let results = UniversityRepository::new(db).search("nowhere").await?;

    assert!(results.is_empty());

    Ok(())
}

/// Tests case-insensitive search on Cyrillic names.
///
/// Verifies that a lowercase term finds a name stored with uppercase Cyrillic
/// letters.
///
/// Expected: Ok(Vec<University>) with the Cyrillic name
#[tokio::test]
async fn matches_cyrillic_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Университет ИТМО", "Томский политехнический", "Tomsk State"] {
        factory::university::UniversityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = UniversityRepository::new(db);
    let results = repo.search("университет").await?;
    let names: Vec<&str> = results.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Университет ИТМО"]);

    let results = repo.search("ТОМСКИЙ").await?;
    let names: Vec<&str> = results.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Томский политехнический"]);

    Ok(())
}

/// Tests that `LIKE` wildcards in the term match literally.
///
/// Verifies that `_` and `%` only match names containing those characters.
///
/// Expected: Ok(Vec<University>) with only the literal matches
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Uni_X", "UniYZ", "Uni 100%"] {
        factory::university::UniversityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = UniversityRepository::new(db);

    let underscore = repo.search("_").await?;
    let names: Vec<&str> = underscore.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Uni_X"]);

    let percent = repo.search("%").await?;
    let names: Vec<&str> = percent.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Uni 100%"]);

    Ok(())
}

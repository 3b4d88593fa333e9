use super::*;

/// Tests that listing is capped and ordered by name.
///
/// Verifies that with more universities than the page size only the first page
/// in name order is returned.
///
/// Expected: Ok(Vec<University>) of `UNIVERSITY_LIST_LIMIT` entries
#[tokio::test]
async fn caps_list_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..15 {
        factory::university::UniversityFactory::new(db)
            .name(format!("University {i:02}"))
            .build()
            .await?;
    }

    let universities = UniversityRepository::new(db).get_all().await?;

    assert_eq!(universities.len() as u64, UNIVERSITY_LIST_LIMIT);
    assert_eq!(universities[0].name, "University 00");
    assert_eq!(universities[9].name, "University 09");

    Ok(())
}

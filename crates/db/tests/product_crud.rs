//! Integration tests for the product repository.
//!
//! Exercises the repository layer against a real database: upsert as
//! insert, upsert as full-row replace, optional lookup, delete
//! semantics, and listing.

use assert_matches::assert_matches;
use sqlx::PgPool;

use catalog_db::models::product::Product;
use catalog_db::repositories::ProductRepo;

fn product(id: i32, name: &str, price: i32) -> Product {
    Product {
        id,
        name: Some(name.to_string()),
        price,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_inserts_new_row(pool: PgPool) {
    ProductRepo::upsert(&pool, &product(101, "HPLaptop", 59000))
        .await
        .unwrap();

    let found = ProductRepo::find_by_id(&pool, 101).await.unwrap();
    assert_eq!(found, Some(product(101, "HPLaptop", 59000)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_replaces_existing_row(pool: PgPool) {
    ProductRepo::upsert(&pool, &product(101, "HPLaptop", 59000))
        .await
        .unwrap();
    ProductRepo::upsert(&pool, &product(101, "HPLaptop G2", 64000))
        .await
        .unwrap();

    let found = ProductRepo::find_by_id(&pool, 101).await.unwrap();
    assert_eq!(found, Some(product(101, "HPLaptop G2", 64000)));

    // Still a single row.
    let all = ProductRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_missing_row(pool: PgPool) {
    let found = ProductRepo::find_by_id(&pool, 999).await.unwrap();
    assert_matches!(found, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_stores_null_name(pool: PgPool) {
    let nameless = Product {
        id: 7,
        name: None,
        price: 100,
    };
    ProductRepo::upsert(&pool, &nameless).await.unwrap();

    let found = ProductRepo::find_by_id(&pool, 7).await.unwrap().unwrap();
    assert_matches!(found.name, None);
    assert_eq!(found.price, 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_whether_row_existed(pool: PgPool) {
    ProductRepo::upsert(&pool, &product(101, "HPLaptop", 59000))
        .await
        .unwrap();

    assert!(ProductRepo::delete(&pool, 101).await.unwrap());
    assert!(!ProductRepo::delete(&pool, 101).await.unwrap());

    let found = ProductRepo::find_by_id(&pool, 101).await.unwrap();
    assert_matches!(found, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_leaves_other_rows_intact(pool: PgPool) {
    ProductRepo::upsert(&pool, &product(101, "HPLaptop", 59000))
        .await
        .unwrap();
    ProductRepo::upsert(&pool, &product(102, "DELL Desktop", 29000))
        .await
        .unwrap();

    ProductRepo::delete(&pool, 101).await.unwrap();

    let all = ProductRepo::list_all(&pool).await.unwrap();
    assert_eq!(all, vec![product(102, "DELL Desktop", 29000)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_returns_rows_ordered_by_id(pool: PgPool) {
    for p in [
        product(103, "Old Monk", 290),
        product(101, "HPLaptop", 59000),
        product(102, "DELL Desktop", 29000),
    ] {
        ProductRepo::upsert(&pool, &p).await.unwrap();
    }

    let all = ProductRepo::list_all(&pool).await.unwrap();
    let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

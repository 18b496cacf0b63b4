use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};

use super::setup_test_db;
use crate::{pizza, restaurant, restaurant_pizza};

#[tokio::test]
async fn test_derived_pizzas_and_restaurants() -> Result<()> {
    let db = setup_test_db().await?;
    let r1 = restaurant::create(&db, "One", "a").await?;
    let r2 = restaurant::create(&db, "Two", "b").await?;
    let p1 = pizza::create(&db, "Emma", "x").await?;
    let p2 = pizza::create(&db, "Geri", "y").await?;

    restaurant_pizza::create(&db, r1.id, p1.id, 3).await?;
    restaurant_pizza::create(&db, r1.id, p2.id, 4).await?;
    restaurant_pizza::create(&db, r2.id, p1.id, 5).await?;

    let mut names: Vec<String> = r1.find_related(pizza::Entity).all(&db).await?.into_iter().map(|p| p.name).collect();
    names.sort();
    assert_eq!(names, vec!["Emma", "Geri"]);

    let sellers = p1.find_related(restaurant::Entity).all(&db).await?;
    assert_eq!(sellers.len(), 2);
    let sellers = p2.find_related(restaurant::Entity).all(&db).await?;
    assert_eq!(sellers, vec![r1.clone()]);
    Ok(())
}

#[tokio::test]
async fn test_storage_cascade_on_restaurant_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let r = restaurant::create(&db, "Gone Soon", "a").await?;
    let keep = restaurant::create(&db, "Stays", "b").await?;
    let p = pizza::create(&db, "Emma", "x").await?;
    restaurant_pizza::create(&db, r.id, p.id, 3).await?;
    restaurant_pizza::create(&db, keep.id, p.id, 4).await?;

    restaurant::Entity::delete_by_id(r.id).exec(&db).await?;

    let orphans = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::RestaurantId.eq(r.id))
        .count(&db)
        .await?;
    assert_eq!(orphans, 0);
    assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 1);
    // pizzas are referenced, not owned
    assert!(pizza::Entity::find_by_id(p.id).one(&db).await?.is_some());
    Ok(())
}

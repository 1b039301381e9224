//! CRUD tests for cats, dogs and chat bots.

use petchat_core::pets::DEFAULT_BOT_COLOR;
use petchat_db::models::bot::{CreateChatBot, UpdateChatBot};
use petchat_db::models::cat::{CreateCat, UpdateCat};
use petchat_db::models::dog::{CreateDog, UpdateDog};
use petchat_db::repositories::{CatRepo, ChatBotRepo, DogRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cat_crud(pool: PgPool) {
    let cat = CatRepo::create(
        &pool,
        &CreateCat {
            name: "Tama".to_string(),
            breed: Some("Mike".to_string()),
            age: Some(3),
            weight: Some(4.2),
        },
    )
    .await
    .unwrap();
    assert_eq!(cat.name, "Tama");
    assert_eq!(cat.weight, Some(4.2));

    let found = CatRepo::find_by_id(&pool, cat.id).await.unwrap().unwrap();
    assert_eq!(found.breed.as_deref(), Some("Mike"));

    let updated = CatRepo::update(
        &pool,
        cat.id,
        &UpdateCat {
            age: Some(4),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.age, Some(4));
    assert_eq!(updated.name, "Tama");

    let list = CatRepo::list(&pool, 100, 0).await.unwrap();
    assert_eq!(list.len(), 1);

    assert!(CatRepo::delete(&pool, cat.id).await.unwrap());
    assert!(!CatRepo::delete(&pool, cat.id).await.unwrap());
    assert!(CatRepo::find_by_id(&pool, cat.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dog_list_pagination(pool: PgPool) {
    for name in ["Pochi", "Hachi", "Shiro"] {
        DogRepo::create(
            &pool,
            &CreateDog {
                name: name.to_string(),
                breed: None,
                age: None,
            },
        )
        .await
        .unwrap();
    }

    let page = DogRepo::list(&pool, 2, 1).await.unwrap();
    let names: Vec<&str> = page.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Hachi", "Shiro"]);
    assert_eq!(DogRepo::count(&pool).await.unwrap(), 3);

    let missing = DogRepo::update(&pool, 9999, &UpdateDog::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bot_defaults_and_update(pool: PgPool) {
    let input: CreateChatBot = serde_json::from_str("{}").unwrap();
    let bot = ChatBotRepo::create(&pool, &input).await.unwrap();
    assert_eq!(bot.name, "");
    assert_eq!(bot.color, DEFAULT_BOT_COLOR);

    let updated = ChatBotRepo::update(
        &pool,
        bot.id,
        &UpdateChatBot {
            name: Some("Buddy".to_string()),
            color: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Buddy");
    assert_eq!(updated.color, DEFAULT_BOT_COLOR);
}

//! Bundled sample data shown by read views when the API has nothing to offer.
//!
//! Timestamps are fixed so the datasets are identical on every call.

use crate::model::{
    FoodStatus, FoodStatusId, Recipe, RecipeId, User, UserId, Visibility,
};
use chrono::{DateTime, TimeZone, Utc};

const UNSPLASH: &str = "https://images.unsplash.com";
const IMAGE_SIZE: &str = "w=400&h=300&fit=crop";

struct RecipeSeed {
    title: &'static str,
    description: &'static str,
    ingredients: &'static str,
    prep_time: &'static str,
    instructions: &'static str,
    photo: &'static str,
}

const RECIPES: [RecipeSeed; 6] = [
    RecipeSeed {
        title: "Pizza",
        description: "Delicious homemade pizza with pineapple, chicken, and fresh cilantro",
        ingredients: "Pizza dough, tomato sauce, mozzarella, pineapple, chicken, red onion, cilantro",
        prep_time: "30 min",
        instructions: "1. Prepare dough\n2. Add toppings\n3. Bake at 200°C for 15 minutes",
        photo: "photo-1513104890138-7c749659a591",
    },
    RecipeSeed {
        title: "Toast",
        description: "Avocado toast with hard-boiled eggs and fresh greens",
        ingredients: "Bread, avocado, eggs, greens, salt, pepper",
        prep_time: "15 min",
        instructions: "1. Toast bread\n2. Mash avocado\n3. Add eggs and greens",
        photo: "photo-1541519227354-08fa5d50c44d",
    },
    RecipeSeed {
        title: "Burger",
        description: "Classic burger with lettuce, tomato, cheese, and pickles",
        ingredients: "Burger bun, beef patty, lettuce, tomato, cheese, pickles, sauce",
        prep_time: "25 min",
        instructions: "1. Cook patty\n2. Toast bun\n3. Assemble with toppings",
        photo: "photo-1568901346375-23c9450c58cd",
    },
    RecipeSeed {
        title: "Spieße",
        description: "Grilled skewers with meat and vegetables",
        ingredients: "Meat, bell peppers, mushrooms, onions, marinade",
        prep_time: "40 min",
        instructions: "1. Marinate meat\n2. Thread onto skewers\n3. Grill until cooked",
        photo: "photo-1555939594-58d7cb561ad1",
    },
    RecipeSeed {
        title: "Banana-Toast",
        description: "French toast with banana and blueberries",
        ingredients: "Bread, eggs, milk, banana, blueberries, powdered sugar",
        prep_time: "20 min",
        instructions: "1. Make French toast\n2. Top with banana and blueberries\n3. Dust with sugar",
        photo: "photo-1484723091739-30a097e8f929",
    },
    RecipeSeed {
        title: "Bowl",
        description: "Healthy bowl with chickpeas, vegetables, and flatbread",
        ingredients: "Chickpeas, mixed greens, olives, vegetables, flatbread, dressing",
        prep_time: "30 min",
        instructions: "1. Prepare chickpeas\n2. Arrange vegetables\n3. Serve with flatbread",
        photo: "photo-1512621776951-a57141f2eefd",
    },
];

fn image(photo: &str) -> String {
    format!("{UNSPLASH}/{photo}?{IMAGE_SIZE}")
}

fn midnight(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn user(id: u64, username: &str, email: &str, first_name: &str, last_name: &str) -> User {
    User {
        id: UserId(id),
        username: username.into(),
        email: email.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
    }
}

pub fn mock_users() -> Vec<User> {
    vec![
        user(1, "Mengmeng", "mengmeng@example.com", "Mengmeng", "User"),
        user(2, "Siebe", "Siebe@example.com", "Siebe", "User"),
        user(3, "Baker", "baker@example.com", "Baker", "Sweet"),
    ]
}

/// Six public recipes by the first sample user, created one per day from
/// 2025-11-14 back to 2025-11-09, newest first.
pub fn mock_recipes() -> Vec<Recipe> {
    let author = &mock_users()[0];
    RECIPES
        .iter()
        .zip(1u64..)
        .map(|(seed, id)| {
            let created_at = midnight(15 - id as u32);
            Recipe {
                id: RecipeId(id),
                author: author.clone(),
                title: seed.title.into(),
                description: seed.description.into(),
                ingredients: seed.ingredients.into(),
                prep_time: Some(seed.prep_time.into()),
                instructions: seed.instructions.into(),
                image_url: Some(image(seed.photo)),
                visibility: Visibility::Public,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

/// Three public stories; the second has no picture.
pub fn mock_stories() -> Vec<FoodStatus> {
    let users = mock_users();
    let story = |id: u64, author: &User, content: &str, photo: Option<&str>| FoodStatus {
        id: FoodStatusId(id),
        author: author.clone(),
        content: content.into(),
        image_url: photo.map(image),
        visibility: Visibility::Public,
        created_at: midnight(15),
        expires_at: None,
    };
    vec![
        story(
            1,
            &users[0],
            "Just made the most amazing pizza! 🍕",
            Some("photo-1513104890138-7c749659a591"),
        ),
        story(2, &users[1], "Perfect pasta carbonara for dinner tonight! 🍝", None),
        story(
            3,
            &users[0],
            "Homemade sushi rolls - so fresh! 🍣",
            Some("photo-1579584425555-c3ce17fd4351"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipes_are_newest_first_on_consecutive_days() {
        let recipes = mock_recipes();
        let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Pizza", "Toast", "Burger", "Spieße", "Banana-Toast", "Bowl"]
        );
        assert_eq!(recipes[0].created_at.to_rfc3339(), "2025-11-14T00:00:00+00:00");
        assert_eq!(recipes[5].created_at.to_rfc3339(), "2025-11-09T00:00:00+00:00");
        assert!(recipes
            .windows(2)
            .all(|pair| Recipe::newest_first(&pair[0], &pair[1]).is_le()));
        assert!(recipes.iter().all(|r| r.author.username == "Mengmeng"));
    }

    #[test]
    fn recipe_images_point_at_unsplash() {
        let pizza = &mock_recipes()[0];
        assert_eq!(
            pizza.image_url.as_deref(),
            Some("https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=300&fit=crop")
        );
    }

    #[test]
    fn three_stories() {
        let stories = mock_stories();
        assert_eq!(stories.len(), 3);
        assert_eq!(stories[1].author.username, "Siebe");
        assert_eq!(stories[1].image_url, None);
        assert!(stories[2].content.contains("sushi"));
    }
}

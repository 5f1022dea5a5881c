use crate::models::CreateRecipeRequest;
use crate::storage::MemStorage;

/// Seeds the demo account and the six sample recipes into a fresh store.
/// The demo user takes id 1 and the recipes take ids 1-6, so the next
/// registration gets id 2 and the next submission id 7.
pub async fn seed_sample_data(store: &MemStorage) {
    let demo = match store
        .create_user("demo".to_string(), "password".to_string())
        .await
    {
        Ok(user) => user,
        Err(e) => {
            log::error!("❌ Failed to seed demo user: {}", e);
            return;
        }
    };

    let recipes = build_sample_recipes();
    let count = recipes.len();
    for recipe in recipes {
        store.create_recipe(recipe, demo.id).await;
    }

    log::info!("🌱 Seeded {} sample recipes for user '{}'", count, demo.username);
}

/// Constrói as 6 receitas de exemplo.
fn build_sample_recipes() -> Vec<CreateRecipeRequest> {
    vec![
        // ─────────────────────────────────────────────
        // 1. Mediterranean Quinoa Bowl
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Mediterranean Quinoa Bowl".into(),
            description: "A protein-rich quinoa bowl with fresh vegetables, feta cheese, and a tangy lemon dressing.".into(),
            image_url: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 15,
            cooking_time: 15,
            servings: 4,
            ingredients: vec![
                "1 cup quinoa, rinsed".into(),
                "2 cups vegetable broth".into(),
                "1 cucumber, diced".into(),
                "1 cup cherry tomatoes, halved".into(),
                "1/2 red onion, finely diced".into(),
                "1/2 cup kalamata olives, pitted and sliced".into(),
                "1/2 cup feta cheese, crumbled".into(),
                "1/4 cup fresh parsley, chopped".into(),
                "3 tbsp extra virgin olive oil".into(),
                "2 tbsp lemon juice".into(),
                "1 clove garlic, minced".into(),
                "Salt and pepper to taste".into(),
            ],
            instructions: vec![
                "In a medium saucepan, combine quinoa and vegetable broth. Bring to a boil, then reduce heat to low, cover, and simmer for 15 minutes until liquid is absorbed and quinoa is tender.".into(),
                "While quinoa cooks, prepare the dressing by whisking together olive oil, lemon juice, minced garlic, salt, and pepper in a small bowl.".into(),
                "Once quinoa is done, fluff with a fork and let cool for 5 minutes.".into(),
                "In a large bowl, combine cooked quinoa, cucumber, cherry tomatoes, red onion, kalamata olives, and parsley.".into(),
                "Pour the dressing over the salad and toss gently to combine.".into(),
                "Top with crumbled feta cheese and additional fresh parsley if desired.".into(),
                "Serve immediately or refrigerate for up to 3 days. Enjoy cold or at room temperature.".into(),
            ],
            cuisine: "Mediterranean".into(),
            meal_type: "Lunch".into(),
            dietary_options: vec!["Vegetarian".into(), "Gluten-Free".into()],
        },

        // ─────────────────────────────────────────────
        // 2. Classic Margherita Pizza
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Classic Margherita Pizza".into(),
            description: "Traditional Neapolitan pizza with San Marzano tomatoes, fresh mozzarella, and basil on a thin crust.".into(),
            image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 20,
            cooking_time: 25,
            servings: 2,
            ingredients: vec![
                "Pizza dough for one 12-inch crust".into(),
                "1/4 cup tomato sauce".into(),
                "8 oz fresh mozzarella, sliced".into(),
                "Fresh basil leaves".into(),
                "2 tbsp olive oil".into(),
                "Salt to taste".into(),
            ],
            instructions: vec![
                "Preheat oven to 475°F (245°C) with a pizza stone if available.".into(),
                "Roll out the pizza dough to a 12-inch circle on a floured surface.".into(),
                "Spread tomato sauce evenly over the dough, leaving a 1/2-inch border for the crust.".into(),
                "Arrange mozzarella slices over the sauce.".into(),
                "Bake for 10-12 minutes until the crust is golden and cheese is bubbly.".into(),
                "Remove from oven, top with fresh basil leaves, drizzle with olive oil, and sprinkle with salt.".into(),
                "Slice and serve immediately.".into(),
            ],
            cuisine: "Italian".into(),
            meal_type: "Dinner".into(),
            dietary_options: vec!["Vegetarian".into()],
        },

        // ─────────────────────────────────────────────
        // 3. Hearty Vegetable Soup
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Hearty Vegetable Soup".into(),
            description: "Comforting vegetable soup packed with seasonal produce, herbs, and a rich vegetable broth.".into(),
            image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 20,
            cooking_time: 40,
            servings: 6,
            ingredients: vec![
                "2 tbsp olive oil".into(),
                "1 onion, diced".into(),
                "2 carrots, diced".into(),
                "2 celery stalks, diced".into(),
                "3 cloves garlic, minced".into(),
                "1 zucchini, diced".into(),
                "1 cup green beans, trimmed and cut".into(),
                "1 can (14 oz) diced tomatoes".into(),
                "6 cups vegetable broth".into(),
                "1 bay leaf".into(),
                "1 tsp dried thyme".into(),
                "1/4 cup fresh parsley, chopped".into(),
                "Salt and pepper to taste".into(),
            ],
            instructions: vec![
                "Heat olive oil in a large pot over medium heat. Add onion, carrots, and celery, and sauté for 5 minutes until softened.".into(),
                "Add garlic and cook for another minute until fragrant.".into(),
                "Add zucchini and green beans, cook for 3 minutes.".into(),
                "Pour in diced tomatoes and vegetable broth. Add bay leaf and thyme.".into(),
                "Bring to a boil, then reduce heat and simmer for 30 minutes until vegetables are tender.".into(),
                "Remove bay leaf, stir in fresh parsley, and season with salt and pepper.".into(),
                "Serve hot with crusty bread if desired.".into(),
            ],
            cuisine: "American".into(),
            meal_type: "Dinner".into(),
            dietary_options: vec!["Vegetarian".into(), "Vegan".into(), "Gluten-Free".into()],
        },

        // ─────────────────────────────────────────────
        // 4. Fudgy Chocolate Brownies
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Fudgy Chocolate Brownies".into(),
            description: "Rich and decadent chocolate brownies with a crackly top and gooey center. Perfect for chocolate lovers.".into(),
            image_url: "https://images.unsplash.com/photo-1563897539064-7f6d36ef5a1c?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 15,
            cooking_time: 25,
            servings: 12,
            ingredients: vec![
                "1/2 cup butter".into(),
                "1 cup granulated sugar".into(),
                "2 eggs".into(),
                "1 tsp vanilla extract".into(),
                "1/2 cup all-purpose flour".into(),
                "1/2 cup unsweetened cocoa powder".into(),
                "1/4 tsp salt".into(),
                "1/2 cup chocolate chips".into(),
            ],
            instructions: vec![
                "Preheat oven to 350°F (175°C). Line an 8x8 inch baking pan with parchment paper.".into(),
                "Melt butter in a microwave-safe bowl. Add sugar and mix well.".into(),
                "Beat in eggs one at a time, then stir in vanilla.".into(),
                "In a separate bowl, combine flour, cocoa powder, and salt.".into(),
                "Gradually add dry ingredients to the wet mixture, mixing just until combined.".into(),
                "Fold in chocolate chips.".into(),
                "Pour batter into the prepared pan and spread evenly.".into(),
                "Bake for 25-30 minutes until a toothpick inserted comes out with a few moist crumbs.".into(),
                "Allow to cool before cutting into squares.".into(),
            ],
            cuisine: "American".into(),
            meal_type: "Dessert".into(),
            dietary_options: vec!["Vegetarian".into()],
        },

        // ─────────────────────────────────────────────
        // 5. Quick Vegetable Stir Fry
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Quick Vegetable Stir Fry".into(),
            description: "A lightning-fast weeknight dinner with fresh vegetables, tofu, and a savory sauce over steamed rice.".into(),
            image_url: "https://images.unsplash.com/photo-1562967914-608f82629710?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 10,
            cooking_time: 15,
            servings: 4,
            ingredients: vec![
                "2 tbsp vegetable oil".into(),
                "1 block (14 oz) firm tofu, cubed".into(),
                "2 cloves garlic, minced".into(),
                "1 tbsp ginger, grated".into(),
                "1 red bell pepper, sliced".into(),
                "1 carrot, julienned".into(),
                "1 cup broccoli florets".into(),
                "1 cup snap peas".into(),
                "3 tbsp soy sauce".into(),
                "1 tbsp rice vinegar".into(),
                "1 tsp sesame oil".into(),
                "1 tsp cornstarch mixed with 2 tbsp water".into(),
                "Cooked rice for serving".into(),
            ],
            instructions: vec![
                "Heat 1 tablespoon oil in a large wok or skillet over high heat. Add tofu and stir-fry until golden brown, about 5 minutes. Remove and set aside.".into(),
                "Add remaining oil to the wok. Add garlic and ginger, stir-fry for 30 seconds until fragrant.".into(),
                "Add bell pepper, carrot, broccoli, and snap peas. Stir-fry for 3-4 minutes until vegetables begin to soften but remain crisp.".into(),
                "In a small bowl, mix soy sauce, rice vinegar, sesame oil, and cornstarch slurry.".into(),
                "Return tofu to the wok, pour sauce over everything, and toss to coat.".into(),
                "Cook for another 1-2 minutes until sauce thickens.".into(),
                "Serve hot over steamed rice.".into(),
            ],
            cuisine: "Asian".into(),
            meal_type: "Dinner".into(),
            dietary_options: vec!["Vegetarian".into(), "Vegan".into()],
        },

        // ─────────────────────────────────────────────
        // 6. Street-Style Tacos
        // ─────────────────────────────────────────────
        CreateRecipeRequest {
            title: "Street-Style Tacos".into(),
            description: "Authentic Mexican tacos with marinated meat, fresh cilantro, onions, and homemade salsa on corn tortillas.".into(),
            image_url: "https://images.unsplash.com/photo-1551024709-8f23befc6f87?auto=format&fit=crop&w=800&h=500".into(),
            prep_time: 20,
            cooking_time: 15,
            servings: 4,
            ingredients: vec![
                "1 lb flank steak, thinly sliced".into(),
                "2 tbsp olive oil".into(),
                "2 limes, juiced".into(),
                "3 cloves garlic, minced".into(),
                "1 tsp cumin".into(),
                "1 tsp chili powder".into(),
                "1/2 tsp paprika".into(),
                "Salt and pepper to taste".into(),
                "12 small corn tortillas".into(),
                "1/2 cup white onion, finely diced".into(),
                "1/2 cup fresh cilantro, chopped".into(),
                "Lime wedges for serving".into(),
                "Hot sauce or salsa".into(),
            ],
            instructions: vec![
                "In a bowl, combine olive oil, lime juice, garlic, cumin, chili powder, paprika, salt, and pepper.".into(),
                "Add sliced steak and marinate for at least 30 minutes.".into(),
                "Heat a large skillet over high heat. Cook the marinated steak for 2-3 minutes per side until browned and cooked through.".into(),
                "Warm tortillas in a dry skillet or directly over a gas flame until slightly charred.".into(),
                "Fill each tortilla with steak, topped with diced onion and chopped cilantro.".into(),
                "Serve with lime wedges and your favorite salsa or hot sauce.".into(),
            ],
            cuisine: "Mexican".into(),
            meal_type: "Dinner".into(),
            dietary_options: vec!["Dairy-Free".into()],
        },
    ]
}

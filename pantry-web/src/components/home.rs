use crate::api;
use crate::components::alert::Alert;
use crate::components::recipe_card::{RecipeCard, RecipeCardSkeleton};
use crate::components::theme_toggle::ThemeToggle;
use leptos::prelude::*;
use pantry_core::models::{CUISINE_OPTIONS, DEFAULT_CUISINE, IngredientSet, RECIPE_COUNT, Recipe};

/// Suggested starters shown in the welcome panel.
const EXAMPLE_INGREDIENTS: &[&str] = &["Chicken", "Tomatoes", "Rice", "Onions", "Cheese"];

#[component]
pub fn Home() -> impl IntoView {
    let ingredients = RwSignal::new(
        ["onion", "garlic", "tomatoes"]
            .iter()
            .map(|s| (*s).to_string())
            .collect::<IngredientSet>(),
    );
    let (draft, set_draft) = signal(String::new());
    let (cuisine, set_cuisine) = signal(DEFAULT_CUISINE.to_string());
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let add_ingredient = move |raw: String| {
        if raw.trim().is_empty() {
            return;
        }
        ingredients.update(|set| {
            set.add(&raw);
        });
    };

    let submit_draft = move || {
        add_ingredient(draft.get());
        set_draft.set(String::new());
    };

    // One generation in flight at a time; the button is disabled while
    // loading, this guard covers the Enter-key path too.
    let do_generate = move || {
        if loading.get() {
            return;
        }
        let list = ingredients.get().to_vec();
        if list.is_empty() {
            set_error.set(Some("Please add at least one ingredient.".to_string()));
            return;
        }
        let cuisine_choice = cuisine.get();

        set_loading.set(true);
        set_error.set(None);
        set_recipes.set(Vec::new());

        leptos::task::spawn_local(async move {
            match api::generate(&list, &cuisine_choice).await {
                Ok(generated) => {
                    set_recipes.set(generated);
                    set_error.set(None);
                }
                Err(message) => {
                    leptos::logging::error!("Generation failed: {}", message);
                    set_error.set(Some(format!(
                        "Sorry, we couldn't generate recipes. Reason: {message}"
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    let on_ingredient_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit_draft();
        }
    };

    view! {
        <div class="home-container">
            <div class="top-bar">
                <ThemeToggle />
            </div>

            <header class="hero">
                <h1>"🍳 Pantry Chef"</h1>
                <p class="tagline">"Tell us what's in your kitchen and our AI chef will do the rest"</p>
            </header>

            <section class="ingredient-panel">
                <div class="panel-header">
                    <label for="ingredient-input">"Your Ingredients"</label>
                    <Show when=move || !ingredients.get().is_empty()>
                        <button
                            class="clear-all"
                            on:click=move |_| ingredients.update(IngredientSet::clear)
                        >
                            "Clear All"
                        </button>
                    </Show>
                </div>

                <div class="ingredient-form">
                    <input
                        id="ingredient-input"
                        type="text"
                        placeholder="e.g., chicken breast, tomatoes"
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_ingredient_keydown
                    />
                    <button class="add-button" on:click=move |_| submit_draft()>
                        "Add"
                    </button>
                </div>

                <div class="ingredient-chips">
                    <For
                        each=move || ingredients.get().to_vec()
                        key=|ingredient| ingredient.clone()
                        children=move |ingredient: String| {
                            let name = ingredient.clone();
                            view! {
                                <span class="chip">
                                    {ingredient}
                                    <button
                                        class="chip-remove"
                                        aria-label="Remove ingredient"
                                        on:click=move |_| ingredients.update(|set| {
                                            set.remove(&name);
                                        })
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>

                <div class="generate-row">
                    <select
                        class="cuisine-select"
                        prop:value=cuisine
                        on:change=move |ev| set_cuisine.set(event_target_value(&ev))
                    >
                        {CUISINE_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=*option>{*option}</option> })
                            .collect_view()}
                    </select>
                    <button
                        class="generate-button"
                        prop:disabled=loading
                        on:click=move |_| do_generate()
                    >
                        {move || if loading.get() {
                            "🍳 Cooking up ideas..."
                        } else {
                            "Generate Recipes"
                        }}
                    </button>
                </div>
            </section>

            {move || error.get().map(|message| view! { <Alert message=message /> })}

            // Invitational panel: nothing generated yet, nothing in flight
            {move || {
                if !loading.get() && error.get().is_none() && recipes.get().is_empty() {
                    Some(view! {
                        <section class="welcome">
                            <h2>"Discover Your Next Favorite Dish"</h2>
                            <p>
                                "Add the ingredients you have, select a cuisine style, \
                                 and let our AI chef inspire you."
                            </p>
                            <div class="example-ingredients">
                                <p>"Try adding:"</p>
                                {EXAMPLE_INGREDIENTS
                                    .iter()
                                    .map(|example| view! {
                                        <ExampleIngredient name=*example on_click=add_ingredient />
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                } else {
                    None
                }
            }}

            <div class="recipe-grid" aria-live="polite">
                {move || if loading.get() {
                    (0..RECIPE_COUNT)
                        .map(|_| view! { <RecipeCardSkeleton /> })
                        .collect_view()
                        .into_any()
                } else {
                    let current = recipes.get();
                    view! {
                        <For
                            each={move || current.clone().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, recipe)| recipe_key(*index, recipe)
                            children=move |(_, recipe)| view! { <RecipeCard recipe=recipe /> }
                        />
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

/// The model is free to suggest two dishes with the same name in one set,
/// so the card's list key includes its position.
fn recipe_key(index: usize, recipe: &Recipe) -> String {
    format!("{index}-{}", recipe.recipe_name)
}

#[component]
fn ExampleIngredient(
    name: &'static str,
    on_click: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button class="example-ingredient" on:click=move |_| on_click(name.to_string())>
            {name}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_named(name: &str) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "recipeName": name,
            "description": "A weeknight staple.",
            "prepTime": "20 minutes",
            "difficulty": "Easy",
            "ingredients": ["rice"],
            "instructions": ["Cook the rice."],
            "cuisineOrigin": {
                "fact": "Fried rice began as a way to revive leftovers.",
                "learnMoreLink": "https://en.wikipedia.org/wiki/Fried_rice"
            },
            "nutritionInfo": { "calories": "400 kcal", "protein": "10g" }
        }))
        .unwrap()
    }

    #[test]
    fn test_same_named_recipes_get_distinct_keys() {
        let recipes = [recipe_named("Fried Rice"), recipe_named("Fried Rice")];
        let keys: Vec<String> = recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| recipe_key(index, recipe))
            .collect();
        assert_ne!(keys[0], keys[1]);
    }
}

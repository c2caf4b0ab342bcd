use leptos::prelude::*;
use pantry_core::models::Recipe;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let name = recipe.recipe_name.clone();
    let description = recipe.description.clone();
    let image_url = recipe.image_url.clone();
    let prep_time = recipe.prep_time.clone();
    let difficulty = recipe.difficulty;
    let calories = recipe.nutrition_info.calories.clone();
    let protein = recipe.nutrition_info.protein.clone();
    let ingredients = recipe.ingredients.clone();
    let instructions = recipe.instructions.clone();
    let origin_fact = recipe.cuisine_origin.fact.clone();
    let origin_link = recipe.cuisine_origin.learn_more_link.clone();

    view! {
        <article class="recipe-card">
            {image_url.map(|url| view! {
                <div class="card-image">
                    <img src=url alt=name.clone() loading="lazy"/>
                </div>
            })}

            <div class="card-content">
                <h3 class="card-title">{name}</h3>
                <p class="card-description">{description}</p>

                <div class="card-tags">
                    <span class="tag tag-time">"Prep: " {prep_time}</span>
                    <span class=format!("tag tag-difficulty-{}", difficulty.as_str().to_lowercase())>
                        {difficulty.as_str()}
                    </span>
                    <span class="tag tag-nutrition">{calories}</span>
                    <span class="tag tag-nutrition">{protein} " protein"</span>
                </div>

                <div class="card-section">
                    <h4>"Ingredients"</h4>
                    <ul class="ingredient-list">
                        <For
                            each=move || ingredients.clone()
                            key=|ingredient| ingredient.clone()
                            children=move |ingredient: String| view! {
                                <li>{ingredient}</li>
                            }
                        />
                    </ul>
                </div>

                <div class="card-section">
                    <h4>"Instructions"</h4>
                    <ol class="instruction-list">
                        {instructions
                            .iter()
                            .map(|step| view! { <li>{step.clone()}</li> })
                            .collect_view()}
                    </ol>
                </div>

                <div class="cuisine-spotlight">
                    <h4>"Cuisine Spotlight"</h4>
                    <p>
                        <span class="spotlight-lead">"Did you know? "</span>
                        {origin_fact}
                    </p>
                    <a
                        href=origin_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="spotlight-link"
                    >
                        "Learn more about this cuisine →"
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Placeholder shown while a generation request is in flight. One skeleton
/// per expected recipe.
#[component]
pub fn RecipeCardSkeleton() -> impl IntoView {
    view! {
        <article class="recipe-card skeleton" aria-hidden="true">
            <div class="card-image skeleton-block"></div>
            <div class="card-content">
                <div class="skeleton-line skeleton-title"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line skeleton-short"></div>
            </div>
        </article>
    }
}

pub mod alert;
pub mod home;
pub mod recipe_card;
pub mod theme_toggle;

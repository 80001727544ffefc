pub mod drop_zone;
pub mod greeting_banner;
pub mod image_preview;
pub mod nutrition_card;

pub mod accordion;
pub mod anchor_link;
pub mod footer;
pub mod forms;
pub mod hero_slider;
pub mod language_toggle;
pub mod loading_screen;
pub mod notifications;
pub mod product_card;
pub mod product_gallery;
pub mod product_grid;
pub mod quantity_stepper;
pub mod reveal;
pub mod site_header;
pub mod testimonials;
pub mod theme_switcher;

mod active_flags;

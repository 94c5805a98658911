pub mod account;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod product_details;
pub mod products;

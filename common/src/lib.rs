pub mod config;
pub mod currency;
pub mod eip1193;
pub mod identity;
pub mod order;
pub mod product;
pub mod storefront;
pub mod wallet;
pub mod wallet_backend;

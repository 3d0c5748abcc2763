pub mod app;
pub mod cart_panel;
pub mod my_orders;
pub mod notice;
pub mod shared_state;
pub mod storefront_view;
pub mod wallet_api;
pub mod wallet_dev;
pub mod wallet_injected;
pub mod wallet_router;
pub mod wallet_view;

pub mod auth_routes;
pub mod car_routes;
pub mod contact_routes;
pub mod message_routes;
pub mod promotion_routes;
pub mod settings_routes;
pub mod stats_routes;

pub mod auth_controller;
pub mod car_controller;
pub mod message_controller;
pub mod promotion_controller;
pub mod settings_controller;
pub mod stats_controller;

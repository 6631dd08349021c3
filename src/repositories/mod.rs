pub mod admin_user_repository;
pub mod car_repository;
pub mod message_repository;
pub mod promotion_repository;
pub mod settings_repository;
pub mod stats_repository;

pub mod auth_dto;
pub mod car_dto;
pub mod message_dto;
pub mod promotion_dto;
pub mod stats_dto;

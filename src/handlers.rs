pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod realtime;
pub mod requests;
pub mod submissions;
pub mod technician;
pub mod users;
pub mod vehicles;

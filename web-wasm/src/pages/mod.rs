//! 画面

pub mod home;
pub mod results;
pub mod not_found;

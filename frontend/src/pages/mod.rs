pub mod about;
pub mod apps;
pub mod contact;
pub mod home;
pub mod not_found;

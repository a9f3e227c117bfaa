pub mod about_me;
pub mod contact_me;
pub mod home;
pub mod portfolio;
pub mod projects;
pub mod skills;
pub mod system;

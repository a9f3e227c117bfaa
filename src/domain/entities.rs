pub mod about_me;
pub mod contact_me;
pub mod portfolio;
pub mod project;
pub mod skill;

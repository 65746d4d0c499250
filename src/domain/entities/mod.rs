pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod timeline;

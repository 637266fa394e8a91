pub mod document;
pub mod gallery;
pub mod profile;

pub mod documents;
pub mod gallery;
pub mod profiles;
pub mod uploads;

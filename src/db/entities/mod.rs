pub mod album;
pub mod track;

pub use album::Entity as Album;
pub use track::Entity as Track;

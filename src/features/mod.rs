pub mod categories;
pub mod identity;
pub mod landing;
pub mod links;

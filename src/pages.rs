pub mod landing;
pub mod legal;
pub mod not_found;

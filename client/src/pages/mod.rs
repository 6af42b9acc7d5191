pub mod evaluation;
pub mod landing;

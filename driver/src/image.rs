pub mod cloudinary;

pub use self::cloudinary::*;

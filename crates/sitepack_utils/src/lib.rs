pub mod base64;
pub mod indexmap;
pub mod xxhash;

pub mod user;

pub use user::{LoginRequest, RegisterRequest, UpdateProfileRequest, User};

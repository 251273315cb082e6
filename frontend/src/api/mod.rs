mod auth;
pub mod client;
mod garages;
mod inventory;
pub mod resource;
pub mod token;
pub mod types;
mod users;

pub use auth::{
    LOGIN_PATH, PASSWORD_CHANGE_PATH, PROFILE_PATH, REGISTER_PATH, TOKEN_REFRESH_PATH,
};
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

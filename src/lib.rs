pub mod auth;
mod client;
pub mod errors;
pub mod models;
mod pagination;
pub mod types;

pub use client::access::{Access, AdminAccess, UserAccess};
pub use client::{AdminClient, CgiClient, CgiClientBuilder, UserClient};
pub use pagination::{Page, PageQuery};

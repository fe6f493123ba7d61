pub(crate) mod access;
mod analysis;
mod base;
mod hospital;
mod patient;
mod project;
mod sample;
mod sequencing;
mod sequencing_center;
mod sequencing_type;

pub use base::{AdminClient, CgiClient, CgiClientBuilder, UserClient};

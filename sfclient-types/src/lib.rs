pub mod json;

pub mod chaos;
pub mod error;
pub mod event;
pub mod health;
pub mod ids;
pub mod mesh;
pub mod node;
pub mod paged;
pub mod partition;
pub mod scaling;

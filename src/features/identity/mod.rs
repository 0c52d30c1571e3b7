pub mod model;
pub mod policy;

pub use model::ActingUser;

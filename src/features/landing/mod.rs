pub mod handlers;
pub mod page;
pub mod routes;

pub use page::LandingPage;

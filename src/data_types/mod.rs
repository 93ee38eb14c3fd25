pub mod frame;
pub mod geo;
pub mod rating;
pub mod route;

pub mod html;
pub mod payload;

pub mod geo;
pub mod html;

pub mod categories;
pub mod form;
pub mod location;
pub mod map;
pub mod pages;

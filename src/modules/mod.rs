pub mod movie;
pub mod pages;

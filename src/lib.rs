pub mod compute;
pub mod constants;
pub mod controller;
pub mod entities;
pub mod error;
pub mod render;
pub mod terminal;

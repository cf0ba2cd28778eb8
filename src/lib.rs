pub mod collision;
pub mod compute;
pub mod driver;
pub mod entities;
pub mod primitives;
pub mod render;
pub mod sprite;

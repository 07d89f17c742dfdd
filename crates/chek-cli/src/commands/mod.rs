pub mod benchmark;
pub mod catalog;
pub mod dispatch;
pub mod project;
pub mod roadmap;
pub mod score;
pub mod shared;

pub mod parse;
pub mod project;

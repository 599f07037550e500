pub mod date;
pub mod text;

pub mod loaders;
pub mod sheet;

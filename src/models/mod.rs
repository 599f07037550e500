pub mod anotacion;
pub mod asignacion;
pub mod categoria;
pub mod maestro;
pub mod referencias;
pub mod registro;
pub mod valid;

pub mod anotaciones;
pub mod asterisco;
pub mod auxiliares;
pub mod maestro;
pub mod normalize;
pub mod pipeline;
pub mod tareas;
pub mod valid;

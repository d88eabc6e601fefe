pub mod d400_comparativa_costos;
pub mod d401_frecuencia_uso;
pub mod d402_rendimiento_combustible;

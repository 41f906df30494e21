pub mod image_io;
pub mod matrix_io;

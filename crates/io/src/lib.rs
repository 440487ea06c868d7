// Matrix I/O boundaries

pub mod csv;
pub mod json;

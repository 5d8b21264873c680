pub mod convert;
pub mod converted_file;

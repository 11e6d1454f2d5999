pub mod constants;
pub mod field;
pub mod machine;
pub mod shapes;

pub mod aggregate;
pub mod mixing;
pub mod runner;
pub mod table;
pub mod walker;

pub mod burn;
pub mod check;
pub mod generate;
pub mod merge;

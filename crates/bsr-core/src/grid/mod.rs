pub mod cell;
pub mod colors;
pub mod columns;
pub mod sort;

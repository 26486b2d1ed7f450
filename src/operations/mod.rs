pub mod creation;
pub mod ordering;

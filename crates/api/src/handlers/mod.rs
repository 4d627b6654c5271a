pub mod costs;
pub mod orders;

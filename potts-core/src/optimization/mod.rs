pub mod anneal;
pub mod history;
pub mod metropolis;

pub mod data;
pub mod error;
pub mod runner;
pub mod seeder;
pub mod store;

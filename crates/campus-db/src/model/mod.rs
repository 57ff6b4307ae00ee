pub mod department;
pub mod role;

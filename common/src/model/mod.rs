pub mod feedback;
pub mod product;

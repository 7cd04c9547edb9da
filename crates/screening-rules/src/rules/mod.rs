pub mod heart;
pub mod kidney;
pub mod liver;

/// Birthday feed modules: parsing, the loaded dataset, its views and rendered lists
pub mod dataset;
pub mod lists;
pub mod parser;
pub mod views;

pub use dataset::BirthdayDataset;

pub mod date;
pub mod price;
pub mod validation;

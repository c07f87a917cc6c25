pub mod assess;
pub mod boundary;
pub mod form;
pub mod health;

pub mod boundary;
pub mod field;
pub mod insight;
pub mod prediction;
pub mod token_count;
pub mod vitals;

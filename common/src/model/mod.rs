pub mod comment;
pub mod submission;

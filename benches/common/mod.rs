pub mod ease;
pub mod samples;

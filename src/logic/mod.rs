pub mod assign;
pub mod classifier;
pub mod engine;
pub mod filter;
pub mod influence;
pub mod parse;
pub mod pools;
pub mod rules;

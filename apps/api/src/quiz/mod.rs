// Quiz generation: question store → stratified sample → answer-free quiz.

pub mod bank;
pub mod handlers;
pub mod sampler;
pub mod store;

//! SkillSync intelligence service: mentor matching, stratified quizzes,
//! resume field extraction and project planning.

pub mod backends;
pub mod config;
pub mod db;
pub mod errors;
pub mod matching;
pub mod models;
pub mod planner;
pub mod quiz;
pub mod resume;
pub mod routes;
pub mod state;
pub mod text;

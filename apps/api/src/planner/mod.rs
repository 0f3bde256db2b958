// Project planning: keyword task templates and categorised step-by-step guides.

pub mod classifier;
pub mod guides;
pub mod handlers;
pub mod templates;

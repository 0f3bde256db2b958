// Resume field extraction: PDF text → name, skills, bio.

pub mod extractor;
pub mod handlers;
pub mod nlp;
pub mod pdf;

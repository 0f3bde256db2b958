// Mentor matching: embeddings → cosine similarity → thresholded top-k.

pub mod embedder;
pub mod handlers;
pub mod matcher;

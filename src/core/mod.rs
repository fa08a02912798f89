pub mod logging;

pub mod text;
pub mod data;
pub mod matcher;
pub mod intent;
pub mod respond;

// Entry point tying the pipeline together
pub mod assistant;

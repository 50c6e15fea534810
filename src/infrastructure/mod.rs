//! Infrastructure layer - logging and knowledge store loading

pub mod knowledge_base;
pub mod logging;

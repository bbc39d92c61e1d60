pub mod feedback;
pub mod matcher;

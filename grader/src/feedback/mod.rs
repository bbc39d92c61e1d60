pub mod auto_feedback;
pub mod manual_feedback;

pub mod iteration_stats;
pub mod render_frame;

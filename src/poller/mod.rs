mod cycle;
mod state;

pub use cycle::run_cycle;
pub use state::PollState;

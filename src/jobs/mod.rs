mod poll;

pub use poll::run_poll_job;

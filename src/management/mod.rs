mod state;

pub use state::PendingState;
pub use state::StateStore;

mod dashboard;
mod roster;

pub use dashboard::OwnerDashboard;
pub use roster::OwnerRoster;

mod leaderboard_entry;
mod pr_record;

pub use leaderboard_entry::LeaderboardEntry;
pub use pr_record::{PrRecord, DATE_FORMAT};

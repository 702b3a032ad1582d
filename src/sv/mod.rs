pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::Leaderboard;
pub use team::Team;
pub use user::User;
pub use workout::Workout;

pub mod country;
pub mod ids;
pub mod mineral;
pub mod production;
pub mod role;
pub mod site;
pub mod user;

pub use country::Country;
pub use ids::{CountryId, MineralId, RoleId, SiteId, StatId, UserId};
pub use mineral::Mineral;
pub use production::ProductionStat;
pub use role::Role;
pub use site::Site;
pub use user::User;

pub use super::bomb::Entity as Bomb;
pub use super::game::Entity as Game;
pub use super::inventory::Entity as Inventory;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;

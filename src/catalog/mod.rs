//! Hero and creature catalog.
//!
//! The built-in catalog holds the four heroes and the creatures they meet on
//! the first legend. Custom catalogs can be loaded from JSON:
//!
//! ```json
//! {
//!   "heroes": [
//!     {"name": "Thorn", "role": "hero", "strength": 6, "willpower": 14,
//!      "dice_by_willpower": {"6": 2, "13": 3, "14": 4}, "dice": "red"}
//!   ],
//!   "enemies": [
//!     {"name": "Gor", "role": "enemy", "strength": 2, "willpower": 4,
//!      "dice_by_willpower": {"4": 2}, "dice": "red"}
//!   ]
//! }
//! ```

mod data;
mod loader;

pub use data::{builtin_enemies, builtin_heroes};
pub use loader::Catalog;

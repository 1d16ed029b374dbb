//! Service-level operations over the repositories.
//!
//! Services are stateless: they hold nothing besides references to the
//! repositories they coordinate. Each operation is one unit of work; the
//! repositories guarantee commit/rollback symmetry underneath.

mod item;
mod user;

pub use item::ItemService;
pub use user::UserService;

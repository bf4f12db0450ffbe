pub mod affected;
pub mod block;
pub mod current;
pub mod pause;
pub mod range;

pub use affected::Affected;
pub use block::{Block, BlockCreate};
pub use current::{Current, SessionState};
pub use pause::{Pause, PauseCreate, PauseSpan};
pub use range::BlockRange;

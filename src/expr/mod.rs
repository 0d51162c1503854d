pub mod criteria;
pub mod group;
pub mod order;

pub use criteria::{Conjunction, Criteria, Term};
pub use group::Grouping;
pub use order::{Direction, Ordering};

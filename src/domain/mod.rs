pub mod errors;
pub mod member;
pub mod order;
pub mod value_objects;

pub use errors::*;
pub use member::Member;
pub use order::Order;
pub use value_objects::*;

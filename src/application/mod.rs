pub mod member;
pub mod order;

pub use member::MemberService;
pub use order::OrderService;

pub mod discount_policy;
pub mod member_repository;

pub use discount_policy::DiscountPolicy;
pub use member_repository::MemberRepository;

pub mod fix;
pub mod rate;

pub use fix::{DEFAULT_FIX_DISCOUNT_AMOUNT, FixDiscountPolicy};
pub use rate::{DEFAULT_RATE_DISCOUNT_PERCENT, InvalidRate, RateDiscountPolicy};

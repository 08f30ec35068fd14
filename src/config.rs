use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::adapters::discount::{DEFAULT_FIX_DISCOUNT_AMOUNT, DEFAULT_RATE_DISCOUNT_PERCENT};

pub const DISCOUNT_POLICY_ENV: &str = "DISCOUNT_POLICY";
pub const FIX_DISCOUNT_AMOUNT_ENV: &str = "FIX_DISCOUNT_AMOUNT";
pub const RATE_DISCOUNT_PERCENT_ENV: &str = "RATE_DISCOUNT_PERCENT";

/// 設定のエラー
///
/// 起動時にのみ発生する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown discount policy: {0} (expected \"fix\" or \"rate\")")]
    UnknownPolicy(String),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Discount rate must be between 0 and 100 percent, got {0}")]
    RateOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// 割引ポリシーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountPolicyKind {
    Fix,
    #[default]
    Rate,
}

impl FromStr for DiscountPolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fix" | "fixed" => Ok(Self::Fix),
            "rate" => Ok(Self::Rate),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// アプリケーション設定
///
/// 割引ポリシーの選択は起動時に一度だけ決まり、実行中に切り替わることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub discount_policy: DiscountPolicyKind,
    pub fix_discount_amount: u64,
    pub rate_discount_percent: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            discount_policy: DiscountPolicyKind::default(),
            fix_discount_amount: DEFAULT_FIX_DISCOUNT_AMOUNT,
            rate_discount_percent: DEFAULT_RATE_DISCOUNT_PERCENT,
        }
    }
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定の項目は既定値を使う。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let discount_policy = match lookup(DISCOUNT_POLICY_ENV) {
            Some(value) => value.parse()?,
            None => defaults.discount_policy,
        };
        let fix_discount_amount = parse_number(&lookup, FIX_DISCOUNT_AMOUNT_ENV)?
            .unwrap_or(defaults.fix_discount_amount);
        let rate_discount_percent = parse_number(&lookup, RATE_DISCOUNT_PERCENT_ENV)?
            .unwrap_or(defaults.rate_discount_percent);

        if rate_discount_percent > 100 {
            return Err(ConfigError::RateOutOfRange(rate_discount_percent));
        }

        Ok(Self {
            discount_policy,
            fix_discount_amount,
            rate_discount_percent,
        })
    }
}

fn parse_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { key, value })
        })
        .transpose()
}

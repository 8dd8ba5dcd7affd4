//! Caller-supplied transaction references (`api_ref`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Provider limit on reference length.
pub const MAX_API_REF_LEN: usize = 30;

/// Replaces characters outside `[A-Za-z0-9_\- ]` with `-` and truncates.
pub fn sanitize_api_ref(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ') {
                c
            } else {
                '-'
            }
        })
        .take(MAX_API_REF_LEN)
        .collect()
}

/// Reference for an STK push: `don-<local part>-<amount in cents>`.
pub fn stk_push_api_ref(email: &str, amount: Decimal) -> String {
    sanitize_api_ref(&format!(
        "don-{}-{}",
        email_local_part(email),
        amount_in_cents(amount)
    ))
}

/// Reference for a hosted checkout: `don-<local part>-<currency>-<cents>`.
pub fn checkout_api_ref(email: &str, currency: &str, amount: Decimal) -> String {
    sanitize_api_ref(&format!(
        "don-{}-{}-{}",
        email_local_part(email),
        currency.to_lowercase(),
        amount_in_cents(amount)
    ))
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// `amount * 100`, truncated toward zero.
pub fn amount_in_cents(amount: Decimal) -> i64 {
    (amount * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .unwrap_or(i64::MAX)
}

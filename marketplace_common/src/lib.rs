mod helpers;
mod money;
mod secret;

pub use helpers::parse_boolean_flag;
pub use money::{Money, MoneyConversionError, USD_CURRENCY_CODE, USD_DIVISOR};
pub use secret::Secret;

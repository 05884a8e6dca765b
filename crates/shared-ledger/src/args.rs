//! Positional argument helpers used by every module's command parser.

use crate::errors::LedgerError;

/// Borrow exactly `N` positional arguments, or fail with `MalformedInput`.
pub fn expect_args<'a, const N: usize>(
    function: &str,
    args: &'a [String],
) -> Result<&'a [String; N], LedgerError> {
    <&[String; N]>::try_from(args).map_err(|_| {
        LedgerError::malformed(format!(
            "Incorrect number of arguments for {}. Expecting {}, got {}",
            function,
            N,
            args.len()
        ))
    })
}

/// Parse a base-10 quantity argument.
///
/// Negative quantities are rejected: a transfer or decrement must never
/// increase a balance.
pub fn parse_quantity(raw: &str, name: &str) -> Result<i64, LedgerError> {
    let quantity: i64 = raw
        .parse()
        .map_err(|e| LedgerError::malformed(format!("{} '{}' is not an integer: {}", name, raw, e)))?;
    if quantity < 0 {
        return Err(LedgerError::malformed(format!(
            "{} must not be negative, got {}",
            name, quantity
        )));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerErrorType;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_expect_args_exact() {
        let args = strings(&["u1", "u2", "20"]);
        let [user, recipient, quantity] = expect_args::<3>("updateBalance", &args).unwrap();

        assert_eq!(user, "u1");
        assert_eq!(recipient, "u2");
        assert_eq!(quantity, "20");
    }

    #[test]
    fn test_expect_args_wrong_count() {
        let args = strings(&["u1"]);
        let err = expect_args::<3>("updateBalance", &args).unwrap_err();

        assert_eq!(err.error_type(), LedgerErrorType::MalformedInput);
        assert!(err.to_string().contains("Expecting 3"));
    }

    #[test]
    fn test_expect_zero_args() {
        assert!(expect_args::<0>("getAllAssets", &[]).is_ok());
        assert!(expect_args::<0>("getAllAssets", &strings(&["x"])).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("40", "decrementQuantity").unwrap(), 40);
        assert_eq!(parse_quantity("0", "decrementQuantity").unwrap(), 0);
        assert!(parse_quantity("forty", "decrementQuantity").is_err());
        assert!(parse_quantity("-5", "decrementQuantity").is_err());
        assert!(parse_quantity("99999999999999999999", "decrementQuantity").is_err());
    }
}

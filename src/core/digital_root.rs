use crate::utils::error::{AlgoError, Result};

/// Repeatedly sums the decimal digits of `n` until a single digit remains.
pub fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        let mut rest = n;
        n = 0;
        while rest > 0 {
            n += rest % 10;
            rest /= 10;
        }
    }
    n
}

/// Signed entry point covering the whole `u64` range. Negative input is
/// rejected instead of being returned unchanged.
pub fn try_digital_root(n: i128) -> Result<u64> {
    if n < 0 {
        return Err(AlgoError::InvalidArgument {
            message: format!(
                "digital root is only defined for non-negative integers, got {}",
                n
            ),
        });
    }
    let value = u64::try_from(n).map_err(|_| AlgoError::InvalidArgument {
        message: format!("{} is larger than {}", n, u64::MAX),
    })?;
    Ok(digital_root(value))
}

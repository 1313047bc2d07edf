use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use crate::error::{Error, Result};

/// An unsigned integer of unbounded magnitude.
///
/// Stored as base-10 digits, least significant first, without leading zeros.
/// Zero is the empty digit sequence but still reports a single digit.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Natural {
    digits: Vec<u8>,
}

impl Natural {
    pub const ZERO: Natural = Natural { digits: Vec::new() };

    fn from_le_digits(mut digits: Vec<u8>) -> Self {
        while digits.last() == Some(&0) {
            digits.pop();
        }

        Natural { digits }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of decimal digits; `0` has one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len().max(1)
    }

    /// Splits `self` into `(high, low)` such that `self = high * 10^m + low`.
    pub fn split_at(&self, m: usize) -> (Natural, Natural) {
        if m >= self.digits.len() {
            return (Natural::ZERO, self.clone());
        }

        let high = Natural {
            digits: self.digits[m..].to_vec(),
        };
        let low = Natural::from_le_digits(self.digits[..m].to_vec());
        (high, low)
    }

    /// Returns `self * 10^m`.
    pub fn shl_digits(&self, m: usize) -> Natural {
        if self.is_zero() {
            return Natural::ZERO;
        }

        let mut digits = vec![0; m + self.digits.len()];
        digits[m..].copy_from_slice(&self.digits);
        Natural { digits }
    }

    pub fn checked_sub(&self, other: &Natural) -> Option<Natural> {
        if self < other {
            None
        } else {
            Some(self.sub_assume_ge(other))
        }
    }

    pub(crate) fn sub_assume_ge(&self, other: &Natural) -> Natural {
        debug_assert!(self >= other);

        let mut digits = Vec::with_capacity(self.digits.len());
        let mut borrow = 0;
        for (index, &digit) in self.digits.iter().enumerate() {
            let subtrahend = other.digits.get(index).copied().unwrap_or(0) + borrow;
            if digit >= subtrahend {
                digits.push(digit - subtrahend);
                borrow = 0;
            } else {
                digits.push(digit + 10 - subtrahend);
                borrow = 1;
            }
        }

        debug_assert_eq!(borrow, 0);
        Natural::from_le_digits(digits)
    }

    /// Long multiplication, quadratic in the number of digits.
    pub(crate) fn mul_schoolbook(&self, other: &Natural) -> Natural {
        if self.is_zero() || other.is_zero() {
            return Natural::ZERO;
        }

        let mut accumulator = vec![0_u32; self.digits.len() + other.digits.len()];
        for (i, &lhs) in self.digits.iter().enumerate() {
            let mut carry = 0;
            for (j, &rhs) in other.digits.iter().enumerate() {
                let value = accumulator[i + j] + u32::from(lhs) * u32::from(rhs) + carry;
                accumulator[i + j] = value % 10;
                carry = value / 10;
            }

            let mut k = i + other.digits.len();
            while carry != 0 {
                let value = accumulator[k] + carry;
                accumulator[k] = value % 10;
                carry = value / 10;
                k += 1;
            }
        }

        Natural::from_le_digits(accumulator.into_iter().map(|digit| digit as u8).collect())
    }

    /// Returns the value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0_u128, |value, &digit| value.checked_mul(10)?.checked_add(u128::from(digit)))
    }
}

fn add_digits(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
    let (long, short) = if lhs.len() >= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };

    let mut digits = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (index, &digit) in long.iter().enumerate() {
        let sum = digit + short.get(index).copied().unwrap_or(0) + carry;
        digits.push(sum % 10);
        carry = sum / 10;
    }

    if carry != 0 {
        digits.push(carry);
    }

    digits
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        Natural {
            digits: add_digits(&self.digits, &rhs.digits),
        }
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        &self + &rhs
    }
}

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        crate::karatsuba_multiply(self, rhs)
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        &self * &rhs
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        let text: String = self.digits.iter().rev().map(|&digit| char::from(b'0' + digit)).collect();
        f.pad_integral(true, "", &text)
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<u128> for Natural {
    fn from(mut value: u128) -> Self {
        let mut digits = Vec::new();
        while value != 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }

        Natural { digits }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Natural {
                fn from(value: $ty) -> Self {
                    Natural::from(u128::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        Natural::from(value as u128)
    }
}

impl TryFrom<i64> for Natural {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::Negative);
        }

        Ok(Natural::from(value.unsigned_abs()))
    }
}

impl TryFrom<i128> for Natural {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self> {
        if value < 0 {
            return Err(Error::Negative);
        }

        Ok(Natural::from(value.unsigned_abs()))
    }
}

impl FromStr for Natural {
    type Err = Error;

    /// Parses decimal text. Surrounding whitespace and a leading `+` are accepted;
    /// `-0` parses as zero, any other negative value is rejected.
    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim_start();
        let mut offset = input.len() - trimmed.len();
        let mut text = trimmed.trim_end();

        let mut negative = false;
        if let Some(rest) = text.strip_prefix('+') {
            text = rest;
            offset += 1;
        } else if let Some(rest) = text.strip_prefix('-') {
            text = rest;
            offset += 1;
            negative = true;
        }

        if text.is_empty() {
            return Err(Error::Empty);
        }

        if let Some(position) = text.bytes().position(|byte| !byte.is_ascii_digit()) {
            return Err(Error::Malformed {
                input: input.to_owned(),
                position: offset + position,
            });
        }

        let value = Natural::from_le_digits(text.bytes().rev().map(|byte| byte - b'0').collect());
        if negative && !value.is_zero() {
            return Err(Error::Negative);
        }

        Ok(value)
    }
}

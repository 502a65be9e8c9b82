use std::fmt;

use log::{debug, warn};

use crate::error::{ParseError, Result};

/// Reads a most-significant-bit-first binary string made of `'0'` and `'1'`.
pub fn parse_binary_string(s: &str) -> Result<u64> {
    let mut parsed: u64 = 0;
    let mut len = 0;

    for (pos, ch) in s.chars().enumerate() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            _ => return Err(ParseError::UnexpectedChar { ch, pos }),
        };
        parsed = (parsed << 1) | bit;
        len += 1;
    }

    if len > Lfsr::MAX_WIDTH as usize {
        return Err(ParseError::TooWide {
            len,
            max: Lfsr::MAX_WIDTH,
        });
    }

    Ok(parsed)
}

/// Shift register of fixed width `n` with a single feedback tap.
///
/// Bits are numbered from 1 (the least significant bit) to `n` (the most
/// significant). Every step shifts the register left by one; the bit that
/// falls out of position `n` is xored with the tap bit and fed back in at
/// position 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: u64,
    tap: u32,
    n: u32,
}

impl Lfsr {
    pub const MAX_WIDTH: u32 = u64::BITS;

    /// The register width is the length of `seed`. `tap` is taken as is; a
    /// tap outside `1..=n` reads as a constant 0 bit.
    pub fn new(seed: &str, tap: u32) -> Result<Self> {
        let state = parse_binary_string(seed)?;
        // Only ASCII digits get past the parser, so bytes == bits.
        let n = seed.len() as u32;

        if tap == 0 || tap > n {
            warn!("tap {} lies outside of a {} bit register", tap, n);
        }

        Ok(Self { state, tap, n })
    }

    pub fn length(&self) -> u32 {
        self.n
    }

    pub fn tap(&self) -> u32 {
        self.tap
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Bit `i` of the state as 0 or 1. Index 0 and anything above 64 read 0.
    pub fn bit_at(&self, i: u32) -> u8 {
        match i.checked_sub(1).and_then(|shift| self.state.checked_shr(shift)) {
            Some(v) => (v & 1) as u8,
            None => 0,
        }
    }

    /// Advances the register by one position and returns the bit shifted in.
    pub fn step(&mut self) -> u8 {
        let bit = self.bit_at(self.n) ^ self.bit_at(self.tap);
        self.state <<= 1;

        if self.bit_at(self.n + 1) == 1 {
            self.state ^= 1 << self.n;
        }

        self.state |= bit as u64;
        debug!("step: bit {} state {:#b}", bit, self.state);

        bit
    }

    /// Runs `k` steps and packs their bits into an integer, first bit highest.
    /// Only the last 64 bits survive when `k` exceeds 64.
    pub fn generate(&mut self, k: u32) -> u64 {
        let mut r = 0;
        for _ in 0..k {
            r = (r << 1) | self.step() as u64;
        }
        r
    }

    /// Endless stream of step outputs.
    pub fn bits(&mut self) -> Bits<'_> {
        Bits(self)
    }
}

impl fmt::Display for Lfsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 0 {
            return write!(f, "LFSR()");
        }
        write!(f, "LFSR({:0width$b})", self.state, width = self.n as usize)
    }
}

#[derive(Debug)]
pub struct Bits<'a>(&'a mut Lfsr);

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.0.step())
    }
}

//! Line addresses and ranges
//!
//! Grammar, read left to right without backtracking:
//!
//! ```text
//! address := anchor? sign? digits?
//! anchor  := '^' (base 0) | '$' (base = buffer length)
//! sign    := '+' | '-'
//! digits  := [0-9]*
//! range   := address (',' address)?
//! ```
//!
//! An address value is a line number as the user sees it: `1` is the first
//! line and `$` is the last one. [`Range::resolve`] turns those numbers into a
//! clamped half-open range of 0-based indices.

/// Cursor over the unconsumed part of a command line
///
/// Only ever advances past whole characters, so [`Scanner::rest`] is always
/// valid UTF-8.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Next character without consuming it
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `byte` if it is next
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume one character
    pub fn bump_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Everything not consumed yet
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.src.len()
    }
}

/// Consume one address and return its value
///
/// Returns `None` when the input runs out at the anchor or the sign decision
/// point. No bounds checking is done here; values may be negative or past the
/// end of the buffer.
pub fn resolve_address(scanner: &mut Scanner<'_>, buffer_len: usize) -> Option<i64> {
    let base = match scanner.peek()? {
        b'^' => {
            scanner.eat(b'^');
            0
        }
        b'$' => {
            scanner.eat(b'$');
            i64::try_from(buffer_len).unwrap_or(i64::MAX)
        }
        _ => 0,
    };

    let direction = match scanner.peek()? {
        b'+' => {
            scanner.eat(b'+');
            1
        }
        b'-' => {
            scanner.eat(b'-');
            -1
        }
        _ => 1,
    };

    let mut magnitude: i64 = 0;
    while let Some(byte) = scanner.peek().filter(u8::is_ascii_digit) {
        scanner.eat(byte);
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    Some(base.saturating_add(direction * magnitude))
}

/// Unresolved pair of address values; `None` means "use the default"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Address {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// Consume `address (',' address)?`
///
/// The end stays unset when there is no comma.
pub fn resolve_range(scanner: &mut Scanner<'_>, buffer_len: usize) -> Option<Address> {
    let start = resolve_address(scanner, buffer_len)?;
    let end = if scanner.eat(b',') {
        Some(resolve_address(scanner, buffer_len)?)
    } else {
        None
    };
    Some(Address {
        start: Some(start),
        end,
    })
}

/// Half-open range `[start, end)` of 0-based line indices
///
/// Always satisfies `0 <= start <= end <= buffer length` for the length it
/// was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// The whole buffer
    pub fn whole(buffer_len: usize) -> Self {
        Self {
            start: 0,
            end: buffer_len,
        }
    }

    /// Resolve user line numbers into a clamped index range
    ///
    /// Line `N` starts at index `N - 1` and an inclusive end line `N` is the
    /// exclusive index `N`. A missing start is the first line; a missing end
    /// selects the single line at `start`. An explicit end of 0 or less lies
    /// before the first line, so `,p` and `0,0p` select nothing.
    pub fn resolve(address: Address, buffer_len: usize) -> Self {
        let start = clamp(address.start.map_or(0, |n| n.saturating_sub(1)), buffer_len);
        let end = match address.end {
            Some(n) => clamp(n, buffer_len),
            None => (start + 1).min(buffer_len),
        };
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Encode as the two leading command arguments (`start + 1`, `end + 1`)
    pub fn to_args(self) -> [String; 2] {
        [(self.start + 1).to_string(), (self.end + 1).to_string()]
    }

    /// Decode the two leading command arguments, clamped to `buffer_len`
    ///
    /// Returns `None` when either token is missing or not a number.
    pub fn from_args(args: &[String], buffer_len: usize) -> Option<Self> {
        let start: i64 = args.first()?.trim().parse().ok()?;
        let end: i64 = args.get(1)?.trim().parse().ok()?;
        let start = clamp(start.saturating_sub(1), buffer_len);
        let end = clamp(end.saturating_sub(1), buffer_len).max(start);
        Some(Self { start, end })
    }
}

fn clamp(value: i64, buffer_len: usize) -> usize {
    let max = i64::try_from(buffer_len).unwrap_or(i64::MAX);
    // In [0, max], so the cast back cannot truncate.
    value.clamp(0, max) as usize
}

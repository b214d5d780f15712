//! Widget instance identifiers.
//!
//! Every dropdown instance carries an id that is assigned once and never
//! changes. Callers may supply one explicitly; otherwise it is drawn from an
//! [`IdSource`]. The default source is random, and tests can inject a
//! [`SequentialIdSource`] to get deterministic ids.

use std::fmt;

use rand::Rng;

/// Prefix used for generated ids.
pub const DEFAULT_ID_PREFIX: &str = "select-dropdown";

/// Number of base-36 digits in a random id token.
const TOKEN_LEN: u32 = 9;

/// The identity of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WidgetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WidgetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A source of fresh widget ids.
pub trait IdSource {
    /// Produce the next id. Ids should be unique within a page.
    fn next_id(&mut self) -> WidgetId;
}

impl<F> IdSource for F
where
    F: FnMut() -> WidgetId,
{
    fn next_id(&mut self) -> WidgetId {
        self()
    }
}

/// Generates `<prefix>-<token>` ids with a random base-36 token.
#[derive(Debug, Clone)]
pub struct RandomIdSource {
    prefix: String,
}

impl RandomIdSource {
    /// Create a source using [`DEFAULT_ID_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    /// Create a source with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for RandomIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> WidgetId {
        let n = rand::thread_rng().gen_range(0..36u64.pow(TOKEN_LEN));
        WidgetId(format!("{}-{}", self.prefix, base36(n, TOKEN_LEN as usize)))
    }
}

/// Generates `<prefix>-1`, `<prefix>-2`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    counter: u64,
}

impl SequentialIdSource {
    /// Create a counter-backed source with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> WidgetId {
        self.counter += 1;
        WidgetId(format!("{}-{}", self.prefix, self.counter))
    }
}

/// Render `n` in lowercase base 36, left-padded with zeros to `width`.
fn base36(mut n: u64, width: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = Vec::with_capacity(width);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    while buf.len() < width {
        buf.push(b'0');
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

//! Ground atoms for the blocks world: `on(block, support)` and `clear(block)`.
//!
//! An [`Atom`] is a tagged, arity-checked value. Identity is
//! `(name, ordered arguments)`; equality, ordering and hashing are derived
//! from the variant fields, never from pointer identity.

use std::str::FromStr;

use crate::error::KernelError;

/// Sentinel support name for the table. The table is always clear; a
/// `clear(mesa)` atom appears only once a block has been moved off it.
pub const TABLE: &str = "mesa";

/// Predicate name of [`Atom::On`].
pub const ON: &str = "on";

/// Predicate name of [`Atom::Clear`].
pub const CLEAR: &str = "clear";

/// A fully instantiated blocks-world predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    /// `on(block, support)`: `block` rests directly on `support`, which is
    /// another block or [`TABLE`].
    On { block: String, support: String },
    /// `clear(block)`: nothing rests on `block`.
    Clear { block: String },
}

impl Atom {
    /// Build an atom from a predicate name and its positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] if the name is not `on` or
    /// `clear`, the arity is wrong for the name, or an argument is not a
    /// valid object name.
    pub fn new(name: &str, args: &[&str]) -> Result<Self, KernelError> {
        match (name, args) {
            (ON, &[block, support]) => Self::on(block, support),
            (CLEAR, &[block]) => Self::clear(block),
            (ON, _) => Err(KernelError::invalid_argument(format!(
                "predicate 'on' takes exactly 2 arguments, got {}",
                args.len()
            ))),
            (CLEAR, _) => Err(KernelError::invalid_argument(format!(
                "predicate 'clear' takes exactly 1 argument, got {}",
                args.len()
            ))),
            _ => Err(KernelError::invalid_argument(format!(
                "unknown predicate '{name}'"
            ))),
        }
    }

    /// `on(block, support)`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] on an invalid object name.
    pub fn on(block: &str, support: &str) -> Result<Self, KernelError> {
        validate_object_name(block)?;
        validate_object_name(support)?;
        Ok(Self::On {
            block: block.to_string(),
            support: support.to_string(),
        })
    }

    /// `clear(block)`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] on an invalid object name.
    pub fn clear(block: &str) -> Result<Self, KernelError> {
        validate_object_name(block)?;
        Ok(Self::Clear {
            block: block.to_string(),
        })
    }

    /// Predicate name (`"on"` or `"clear"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::On { .. } => ON,
            Self::Clear { .. } => CLEAR,
        }
    }

    /// Positional arguments in declaration order.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::On { block, support } => vec![block.as_str(), support.as_str()],
            Self::Clear { block } => vec![block.as_str()],
        }
    }

    // Operators build atoms from names that already passed validation.
    pub(crate) fn on_unchecked(block: &str, support: &str) -> Self {
        Self::On {
            block: block.to_string(),
            support: support.to_string(),
        }
    }

    pub(crate) fn clear_unchecked(block: &str) -> Self {
        Self::Clear {
            block: block.to_string(),
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.args().join(", "))
    }
}

impl FromStr for Atom {
    type Err = KernelError;

    /// Parse `name(arg, ...)`; whitespace around tokens is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (name, rest) = text
            .split_once('(')
            .ok_or_else(|| KernelError::invalid_argument(format!("malformed atom '{text}'")))?;
        let inner = rest
            .strip_suffix(')')
            .ok_or_else(|| KernelError::invalid_argument(format!("malformed atom '{text}'")))?;
        let args: Vec<&str> = inner.split(',').map(str::trim).collect();
        Self::new(name.trim(), &args)
    }
}

/// Object names must be non-empty and free of the characters the atom and
/// key renderings use as delimiters.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] for an unusable name.
pub fn validate_object_name(name: &str) -> Result<(), KernelError> {
    if name.is_empty() {
        return Err(KernelError::invalid_argument("object name is empty"));
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | ',' | ';' | '='))
    {
        return Err(KernelError::invalid_argument(format!(
            "object name '{name}' contains a reserved character"
        )));
    }
    Ok(())
}

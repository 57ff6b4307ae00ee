//! Natural-key queries for the reference tables.
//!
//! Every upsert is `INSERT ... ON CONFLICT (name) DO NOTHING RETURNING *`. When the
//! insert is skipped the existing row is read back, so callers always get a row.

pub mod department;
pub mod role;

/// Outcome of a natural-key upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted<T> {
    /// No row with the key existed; this one was inserted.
    Created(T),
    /// A row with the key already existed and was left untouched.
    Existing(T),
}

impl<T> Upserted<T> {
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[must_use]
    pub fn get(&self) -> &T {
        match self {
            Self::Created(row) | Self::Existing(row) => row,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(row) | Self::Existing(row) => row,
        }
    }

    /// Log label for the outcome.
    #[must_use]
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Existing(_) => "existing",
        }
    }
}

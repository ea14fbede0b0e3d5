use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Essential,
    Skip,
}

impl EntryKind {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "essential" => Some(Self::Essential),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Skip => "skip",
        }
    }

    pub(crate) fn all() -> &'static [EntryKind] {
        &[Self::Essential, Self::Skip]
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Essential => write!(f, "Essential"),
            Self::Skip => write!(f, "Skipped"),
        }
    }
}

/// A single challenge event: either an essential purchase or a skipped
/// temptation. Amount and note are validated before construction; an `Entry`
/// in hand always satisfies `amount > 0` and a non-empty trimmed note.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub(crate) id: i64,
    pub(crate) kind: EntryKind,
    pub(crate) amount: Decimal,
    pub(crate) note: String,
    /// RFC 3339 UTC instant, captured at creation.
    pub(crate) created_at: String,
}

impl Entry {
    pub(crate) fn is_essential(&self) -> bool {
        self.kind == EntryKind::Essential
    }

    pub(crate) fn is_skip(&self) -> bool {
        self.kind == EntryKind::Skip
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    /// The address lies past the end of the logical address space.
    OutOfBounds { address: u64, page_number: u64 },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::OutOfBounds {
                address,
                page_number,
            } => write!(
                f,
                "page number {} out of bounds for logical address {}",
                page_number, address
            ),
        }
    }
}

impl std::error::Error for TranslationError {}

/// Rejected address-space geometry. Raised once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroPageSize,
    NoPages,
    NoFrames,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPageSize => write!(f, "page size must be positive"),
            ConfigError::NoPages => write!(f, "page count must be positive"),
            ConfigError::NoFrames => write!(f, "frame count must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A broken link between the page table and the frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A present page points at a frame that holds something else.
    FrameMismatch {
        page_number: usize,
        frame_number: usize,
        occupant: Option<usize>,
    },
    /// A frame holds a page the page table does not consider present.
    StaleOccupant { frame_number: usize, page_number: usize },
    /// The same page sits in two frames.
    DuplicateOccupant { page_number: usize },
    CursorOutOfRange { cursor: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::FrameMismatch {
                page_number,
                frame_number,
                occupant,
            } => write!(
                f,
                "page {} maps to frame {} which holds {:?}",
                page_number, frame_number, occupant
            ),
            InvariantViolation::StaleOccupant {
                frame_number,
                page_number,
            } => write!(
                f,
                "frame {} holds page {} which is not present",
                frame_number, page_number
            ),
            InvariantViolation::DuplicateOccupant { page_number } => {
                write!(f, "page {} occupies more than one frame", page_number)
            }
            InvariantViolation::CursorOutOfRange { cursor } => {
                write!(f, "clock cursor {} is past the last frame", cursor)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

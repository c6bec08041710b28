//! Domain layer constants
//!
//! Values that define the naming and sizing policy shared by all
//! embedding providers.

// ============================================================================
// VECTOR NAMING CONSTANTS
// ============================================================================

/// Separator between the backend tag and the sanitized model identifier
pub const VECTOR_NAME_SEPARATOR: char = '-';

/// Characters in a model identifier that are replaced when deriving a vector name
pub const VECTOR_NAME_RESERVED_CHARS: [char; 2] = [':', '/'];

/// Replacement for reserved characters in vector names
pub const VECTOR_NAME_REPLACEMENT: char = '_';

// ============================================================================
// VECTOR SIZING CONSTANTS
// ============================================================================

/// Sample text embedded to discover a model's vector dimensionality
pub const VECTOR_SIZE_PROBE_TEXT: &str = "test";

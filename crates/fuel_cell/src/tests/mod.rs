//! Cross-module gameplay scenarios

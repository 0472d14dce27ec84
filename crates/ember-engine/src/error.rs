use std::fmt;

use crate::texture::TextureId;

/// Why a texture cannot back a renderable operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextureStateReason {
    /// No dimensions registered for the texture.
    Unbound,
    /// Registered with a zero width or height.
    ZeroDimensions { width: u32, height: u32 },
}

/// Error returned by renderable constructors and pixel-space setters.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RenderableError {
    InvalidTextureState {
        texture: TextureId,
        reason: TextureStateReason,
    },
}

impl fmt::Display for RenderableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderableError::InvalidTextureState { texture, reason } => match reason {
                TextureStateReason::Unbound => {
                    write!(f, "invalid texture state: {texture} is not loaded")
                }
                TextureStateReason::ZeroDimensions { width, height } => {
                    write!(f, "invalid texture state: {texture} has zero size ({width}x{height})")
                }
            },
        }
    }
}

impl std::error::Error for RenderableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_texture_and_size() {
        let err = RenderableError::InvalidTextureState {
            texture: TextureId(3),
            reason: TextureStateReason::ZeroDimensions { width: 0, height: 12 },
        };
        assert_eq!(err.to_string(), "invalid texture state: texture#3 has zero size (0x12)");
    }

    #[test]
    fn display_unbound() {
        let err = RenderableError::InvalidTextureState {
            texture: TextureId(0),
            reason: TextureStateReason::Unbound,
        };
        assert_eq!(err.to_string(), "invalid texture state: texture#0 is not loaded");
    }
}

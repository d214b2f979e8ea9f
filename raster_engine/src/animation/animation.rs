use super::frame_source::*;

use thiserror::Error;

///
/// Reasons an animation can't move to a frame
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// There's nothing loaded, or the frame couldn't be shown
    #[error("animation has no source, or the frame could not be shown")]
    InsufficientCondition,

    /// The loaded picture is not animated
    #[error("picture is not animated")]
    NonSupport,
}

///
/// Controls which frame of an animated picture is displayed
///
pub struct Animation<TSource: FrameSource> {
    source: Option<TSource>,
}

impl<TSource: FrameSource> Default for Animation<TSource> {
    fn default() -> Self {
        Animation::new()
    }
}

impl<TSource: FrameSource> Animation<TSource> {
    ///
    /// Creates an animation with nothing loaded
    ///
    pub fn new() -> Animation<TSource> {
        Animation { source: None }
    }

    ///
    /// Creates an animation of the frames from a source
    ///
    pub fn with_source(source: TSource) -> Animation<TSource> {
        Animation { source: Some(source) }
    }

    ///
    /// Replaces the source of frames, returning the old one
    ///
    pub fn load(&mut self, source: TSource) -> Option<TSource> {
        self.source.replace(source)
    }

    #[inline]
    pub fn source(&self) -> Option<&TSource> {
        self.source.as_ref()
    }

    ///
    /// The source, if it's animated
    ///
    #[inline]
    fn animated(&self) -> Option<&TSource> {
        self.source.as_ref().filter(|source| source.animatable())
    }

    ///
    /// Moves to a frame
    ///
    pub fn frame(&mut self, frame_no: u32) -> Result<(), AnimationError> {
        let source = self.source.as_mut().ok_or(AnimationError::InsufficientCondition)?;

        if !source.animatable() {
            return Err(AnimationError::NonSupport);
        }

        if source.frame(frame_no) {
            Ok(())
        } else {
            Err(AnimationError::InsufficientCondition)
        }
    }

    ///
    /// The frame being shown (0 if the source is not animated)
    ///
    pub fn cur_frame(&self) -> u32 {
        self.animated().map(|source| source.cur_frame()).unwrap_or(0)
    }

    pub fn total_frame(&self) -> u32 {
        self.animated().map(|source| source.total_frame()).unwrap_or(0)
    }

    ///
    /// Length of the animation in seconds (0 if the source is not animated)
    ///
    pub fn duration(&self) -> f32 {
        self.animated().map(|source| source.duration()).unwrap_or(0.0)
    }
}

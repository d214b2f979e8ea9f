///
/// Something that can produce the frames of an animated picture
///
pub trait FrameSource {
    ///
    /// True if this source has more than one frame
    ///
    fn animatable(&self) -> bool;

    ///
    /// Moves to a frame, returning false if the frame can't be shown
    ///
    fn frame(&mut self, frame_no: u32) -> bool;

    fn cur_frame(&self) -> u32;
    fn total_frame(&self) -> u32;

    ///
    /// Length of the animation in seconds
    ///
    fn duration(&self) -> f32;
}

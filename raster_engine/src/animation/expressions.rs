///
/// Evaluates scripted values for the animated properties of a picture
///
pub trait ExpressionEvaluator {
    ///
    /// Called before any expressions are evaluated
    ///
    fn prepare(&mut self) { }

    ///
    /// Called when the frame being displayed changes
    ///
    fn update(&mut self, _frame_no: f32) { }

    ///
    /// Evaluates the expression attached to a property at a frame, returning `None` if there isn't one
    ///
    fn evaluate(&mut self, property_id: u64, frame_no: f32) -> Option<f32>;
}

///
/// An evaluator for pictures without any expressions
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoExpressions;

impl ExpressionEvaluator for NoExpressions {
    #[inline]
    fn evaluate(&mut self, _property_id: u64, _frame_no: f32) -> Option<f32> {
        None
    }
}

///
/// An evaluator that calls a function supplied by the host
///
pub struct FnExpressions<TFn>
where
    TFn: FnMut(u64, f32) -> Option<f32>,
{
    evaluate:   TFn,
    frame_no:   f32,
}

impl<TFn> FnExpressions<TFn>
where
    TFn: FnMut(u64, f32) -> Option<f32>,
{
    pub fn new(evaluate: TFn) -> FnExpressions<TFn> {
        FnExpressions { evaluate, frame_no: 0.0 }
    }

    ///
    /// The frame passed to the last call to `update()`
    ///
    #[inline]
    pub fn frame_no(&self) -> f32 {
        self.frame_no
    }
}

impl<TFn> ExpressionEvaluator for FnExpressions<TFn>
where
    TFn: FnMut(u64, f32) -> Option<f32>,
{
    fn update(&mut self, frame_no: f32) {
        self.frame_no = frame_no;
    }

    fn evaluate(&mut self, property_id: u64, frame_no: f32) -> Option<f32> {
        (self.evaluate)(property_id, frame_no)
    }
}

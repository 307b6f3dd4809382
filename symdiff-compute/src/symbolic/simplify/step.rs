/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `2-3 = -1`
    /// `2*3 = 6`
    /// `3/2 = 1.5`
    FoldConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `2^3 = 8`
    FoldPower,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `exp(0) = 1`
    FoldExp,

    /// `ln(1) = 0`
    FoldLn,

    /// `sin(0) = 0`
    FoldSin,

    /// `cos(0) = 1`
    FoldCos,

    /// `f(2)` evaluated to a number, for a composition or named function `f`
    FoldComposite,
}

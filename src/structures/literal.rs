/*!
Literals, i.e. variables paired with a polarity.

A literal is stored as a (non-zero) i32, with the magnitude being the variable and the sign the polarity, as in the DIMACS format.

```rust
# use bough_sat::structures::literal::Literal;
let literal = Literal::new(79, false);

assert_eq!(literal.variable(), 79);
assert!(!literal.polarity());
assert!(literal.negate().polarity());
assert_eq!(literal.as_int(), -79);
assert!(literal.satisfied_by(false));
```
*/

use crate::structures::variable::{Variable, VARIABLE_MAX};

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(i32);

impl Literal {
    /// A fresh literal, specified by pairing a (non-zero) variable with a polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        debug_assert!(0 < variable && variable <= VARIABLE_MAX);
        match polarity {
            true => Literal(variable as i32),
            false => Literal(-(variable as i32)),
        }
    }

    /// A literal from its integer form, if the integer is non-zero and in range.
    pub fn from_int(int: isize) -> Option<Self> {
        match int {
            0 => None,
            _ if int.unsigned_abs() > VARIABLE_MAX as usize => None,
            _ => Some(Literal(int as i32)),
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal(-self.0)
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        self.0.unsigned_abs()
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.0.is_positive()
    }

    /// Whether the literal is true when its variable has the given value.
    pub fn satisfied_by(&self, value: bool) -> bool {
        self.polarity() == value
    }

    /// The literal in it's integer form, with sign indicating polarity.
    pub fn as_int(&self) -> isize {
        self.0 as isize
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

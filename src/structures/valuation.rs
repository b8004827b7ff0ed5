/*!
A (partial) function from variables to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, for the [top variable](crate::structures::variable::TOP_VARIABLE).
- Each non-zero index of the vector is a variable.

 That is, for a valuation *v*:
 -  *v*\[x\] = Some(true) *if any only if* x is true.
 -  *v*\[x\] = Some(false) *if any only if* x is false.
 -  *v*\[x\] = None *if any only if* x is unassigned.

```rust
# use bough_sat::structures::valuation::{fresh_valuation, Valuation};
let mut valuation = fresh_valuation(3);
valuation[2] = Some(false);

assert_eq!(valuation.value_of(2), Some(false));
assert_eq!(valuation.unvalued_variables().count(), 2);
assert_eq!(valuation.valued_count(), 1);
```
*/

use crate::structures::variable::Variable;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation on `variable_count` variables, where no variable has a value.
pub fn fresh_valuation(variable_count: Variable) -> CValuation {
    let mut valuation = vec![None; variable_count as usize + 1];
    valuation[0] = Some(true);
    valuation
}

/// Something which stores the value of a variable, or the information that the variable has no value.
pub trait Valuation {
    /// The value of a variable under the valuation, if any.
    ///
    /// Variables outside of the valuation have no value.
    fn value_of(&self, variable: Variable) -> Option<bool>;

    /// The count of variables in the valuation, excluding top.
    fn variable_count(&self) -> usize;

    /// An iterator over variables without a value, in ascending order.
    fn unvalued_variables(&self) -> impl Iterator<Item = Variable>;

    /// The count of variables with a value, excluding top.
    fn valued_count(&self) -> usize;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.get(variable as usize).copied().flatten()
    }

    fn variable_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn unvalued_variables(&self) -> impl Iterator<Item = Variable> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(variable, value)| match value {
                None => Some(variable as Variable),
                Some(_) => None,
            })
    }

    fn valued_count(&self) -> usize {
        self.iter().skip(1).filter(|value| value.is_some()).count()
    }
}

/*!
The occurrence index, a compact cross-reference from variables to the clauses they occur in.

Occurrences of all variables are stored contiguously, with an offset table marking the range reserved for each variable.
The occurrences of variable *v* are those in `entries[offsets[v]..offsets[v + 1]]`, each recording a clause and the polarity of *v* in the clause.

With this propagation of a variable visits only the clauses the variable occurs in, rather than every clause of the formula.

For construction, see [OccurrenceIndex::build](crate::structures::occurrence::OccurrenceIndex::build).

# Invariants
- The count of all entries is the count of all literals in the formula.
- Each occurrence of a variable in a clause appears exactly once, and the entries of a variable are ordered by clause id.
*/

use crate::structures::{clause::ClauseId, variable::Variable};

/// An occurrence of a variable in some clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub clause: ClauseId,
    pub polarity: bool,
}

/// The cross-reference from variables to occurrences.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceIndex {
    pub(crate) offsets: Vec<usize>,
    pub(crate) entries: Vec<Occurrence>,
}

impl OccurrenceIndex {
    /// The occurrences of a variable, ordered by clause.
    pub fn occurrences_of(&self, variable: Variable) -> &[Occurrence] {
        let variable = variable as usize;
        match (self.offsets.get(variable), self.offsets.get(variable + 1)) {
            (Some(&start), Some(&end)) => &self.entries[start..end],
            _ => &[],
        }
    }

    /// The count of all occurrences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

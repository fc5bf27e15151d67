use crate::token::Token;

/// Bound on how many Skolem/Herbrand constants a single branch may
/// synthesize. Without a cap, a stubborn `∀` formula re-firing against a
/// growing domain can expand forever; `K = 10` is the point past which the
/// branch is reported `Undecidable` instead of looping.
pub const MAX_CONSTANTS: usize = 10;

/// An append-only, per-branch set of synthesized constants, named `"0"`,
/// `"1"`, ... by the order they were introduced. Cloning a branch clones its
/// pool by value, so sibling branches grow independent domains after a
/// split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantPool {
    constants: Vec<Token>,
}

impl ConstantPool {
    pub fn new() -> Self {
        ConstantPool { constants: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn can_add(&self) -> bool {
        self.constants.len() < MAX_CONSTANTS
    }

    /// Synthesizes and appends the next constant, named by its decimal
    /// index. Panics if the pool is already at capacity — callers must check
    /// `can_add` first, mirroring how `Theory::try_expand` only calls this
    /// after confirming room exists.
    pub fn add(&mut self) -> Token {
        assert!(self.can_add(), "constant pool is at capacity");
        let name = Token::from(self.constants.len().to_string().as_str());
        self.constants.push(name.clone());
        name
    }

    pub fn get(&self, n: usize) -> Option<&Token> {
        self.constants.get(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_names_constants_by_index() {
        let mut pool = ConstantPool::new();
        assert_eq!(pool.add(), Token::from("0"));
        assert_eq!(pool.add(), Token::from("1"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn can_add_false_at_capacity() {
        let mut pool = ConstantPool::new();
        for _ in 0..MAX_CONSTANTS {
            assert!(pool.can_add());
            pool.add();
        }
        assert!(!pool.can_add());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let pool = ConstantPool::new();
        assert_eq!(pool.get(0), None);
    }
}

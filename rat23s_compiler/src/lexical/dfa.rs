//! Transition tables for identifier and numeric literal recognition

pub type State = usize;

/// Table-driven DFA over a fixed set of input classes
#[derive(Debug, Clone)]
pub struct Dfa<const STATES: usize, const CLASSES: usize> {
    transitions: [[State; CLASSES]; STATES],
    reject: State,
}

impl<const STATES: usize, const CLASSES: usize> Dfa<STATES, CLASSES> {
    pub const fn new(transitions: [[State; CLASSES]; STATES], reject: State) -> Self {
        Self {
            transitions,
            reject,
        }
    }

    pub fn next(&self, state: State, class: usize) -> State {
        self.transitions[state][class]
    }

    pub fn is_reject(&self, state: State) -> bool {
        state == self.reject
    }
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Input classes: letter, digit, underscore, other
pub type IdentifierDfa = Dfa<5, 4>;

pub const IDENTIFIER_START: State = 0;

/// States 0-3 accept; state 4 is the sticky reject state
pub fn identifier_dfa() -> IdentifierDfa {
    Dfa::new(
        [
            [1, 2, 3, 4],
            [1, 2, 3, 4],
            [1, 2, 3, 4],
            [1, 2, 3, 4],
            [4, 4, 4, 4],
        ],
        4,
    )
}

pub fn identifier_class(byte: u8) -> usize {
    match byte {
        b if b.is_ascii_alphabetic() => 0,
        b if b.is_ascii_digit() => 1,
        b'_' => 2,
        _ => 3,
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Input classes: digit, decimal point, other
pub type NumberDfa = Dfa<4, 3>;

pub const NUMBER_START: State = 0;
pub const INTEGER_STATE: State = 0;
pub const REAL_STATE: State = 2;

/// State 1 has seen the decimal point; state 3 is the sticky reject state
pub fn number_dfa() -> NumberDfa {
    Dfa::new([[0, 1, 3], [2, 3, 3], [2, 3, 3], [3, 3, 3]], 3)
}

pub fn number_class(byte: u8) -> usize {
    match byte {
        b if b.is_ascii_digit() => 0,
        b'.' => 1,
        _ => 2,
    }
}

/// Identity of one accepted result set. Visibility events tagged with an older
/// generation belong to a torn-down observation session and are ignored.
pub type Generation = u64;

/// One-way reveal flags for the cards of the current result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealState {
    generation: Generation,
    revealed: Vec<bool>,
}

impl RevealState {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a new generation with `count` unrevealed cards.
    pub(crate) fn reset(&mut self, count: usize) -> Generation {
        self.generation += 1;
        self.revealed = vec![false; count];
        self.generation
    }

    /// Returns `true` only on the first reveal of a card in the live generation.
    pub(crate) fn reveal(&mut self, generation: Generation, index: usize) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::RevealState;

    #[test]
    fn reveal_is_idempotent_and_generation_scoped() {
        let mut reveal = RevealState::default();
        let first = reveal.reset(2);
        assert!(reveal.reveal(first, 0));
        assert!(!reveal.reveal(first, 0));
        assert!(!reveal.reveal(first, 5));

        let second = reveal.reset(2);
        assert!(!reveal.is_revealed(0));
        assert!(!reveal.reveal(first, 1));
        assert!(reveal.reveal(second, 1));
        assert_eq!(reveal.revealed_count(), 1);
    }
}

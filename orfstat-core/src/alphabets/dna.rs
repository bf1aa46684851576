use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

pub fn n_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTNacgtn")
}

pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTRYSWKMBDHVNZacgtryswkmbdhvnz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"gaUUaca"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }

    #[test]
    fn number_is_no_word() {
        assert!(!alphabet().is_word(b"42"));
    }

    #[test]
    fn iupac_accepts_ambiguity_codes() {
        assert!(iupac_alphabet().is_word(b"ACGTNRYSWKM"));
        assert!(!n_alphabet().is_word(b"ACGTR"));
    }
}

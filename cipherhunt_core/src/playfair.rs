use crate::cipher::Cipher;

const GRID: usize = 5;

/// Playfair cipher: digram substitution over a 5x5 letter grid built
/// from a seed key, with 'j' folded into 'i'.
///
/// Only alphabetic characters participate. Doubled letters in a digram
/// are split with an 'x' filler and an unpaired trailing letter is
/// padded with 'x', so texts containing either do not round-trip
/// byte-for-byte. Non-letters keep their original positions in the
/// output and letter case is restored from the source character.
///
/// Playfair has an open-ended key space and is not part of the bounded
/// brute-force search; it is a standalone encrypt/decrypt capability.
#[derive(Clone, Debug)]
pub struct PlayfairCipher {
    key: String,
    grid: [[char; GRID]; GRID],
}

impl PlayfairCipher {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let grid = build_grid(&key);
        Self { key, grid }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn position(&self, c: char) -> (usize, usize) {
        let folded = match c {
            'j' => 'i',
            other => other,
        };
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == folded {
                    return (row, col);
                }
            }
        }
        // Callers only pass lowercase ASCII letters, all of which are in
        // the grid after the j->i fold.
        unreachable!("{c:?} is not a grid letter")
    }

    fn map_pair(&self, first: char, second: char, decrypt: bool) -> (char, char) {
        let (row1, col1) = self.position(first);
        let (row2, col2) = self.position(second);
        // Moving one step back is the same as four steps forward.
        let step = if decrypt { GRID - 1 } else { 1 };
        if row1 == row2 {
            (
                self.grid[row1][(col1 + step) % GRID],
                self.grid[row2][(col2 + step) % GRID],
            )
        } else if col1 == col2 {
            (
                self.grid[(row1 + step) % GRID][col1],
                self.grid[(row2 + step) % GRID][col2],
            )
        } else {
            (self.grid[row1][col2], self.grid[row2][col1])
        }
    }

    /// Runs the digram transform over the letters of `text`, inserting
    /// filler on encryption for doubled or unpaired letters.
    fn code_letters(&self, text: &str, decrypt: bool) -> Vec<char> {
        let letters: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let mut coded = Vec::with_capacity(letters.len() + 1);
        let mut i = 0;
        while i < letters.len() {
            let first = letters[i];
            let mut second = if i + 1 < letters.len() {
                letters[i + 1]
            } else {
                'x'
            };
            let mut consumed = 2;
            if !decrypt && first == second {
                second = 'x';
                consumed = 1;
            }
            let (a, b) = self.map_pair(first, second, decrypt);
            coded.push(a);
            coded.push(b);
            i += consumed;
        }
        coded
    }

    fn transform(&self, text: &str, decrypt: bool) -> String {
        let mut coded = self.code_letters(text, decrypt).into_iter();
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    match coded.next() {
                        Some(letter) if c.is_ascii_uppercase() => letter.to_ascii_uppercase(),
                        Some(letter) => letter,
                        None => c,
                    }
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Cipher for PlayfairCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        self.transform(plaintext, false)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        self.transform(ciphertext, true)
    }

    fn name(&self) -> &'static str {
        "Playfair"
    }

    fn key_descriptor(&self) -> String {
        format!("key={}", self.key)
    }
}

/// Seed letters fill the grid first (unique, j folded away), then the
/// rest of a-z minus j in alphabetical order.
fn build_grid(key: &str) -> [[char; GRID]; GRID] {
    let mut used = [false; 26];
    used['j' as usize - 'a' as usize] = true;
    let mut cells = Vec::with_capacity(GRID * GRID);

    for c in key.to_lowercase().chars() {
        if c.is_ascii_lowercase() && !used[c as usize - 'a' as usize] {
            used[c as usize - 'a' as usize] = true;
            cells.push(c);
        }
    }
    for c in 'a'..='z' {
        if !used[c as usize - 'a' as usize] {
            used[c as usize - 'a' as usize] = true;
            cells.push(c);
        }
    }

    let mut grid = [[' '; GRID]; GRID];
    for (slot, c) in cells.into_iter().take(GRID * GRID).enumerate() {
        grid[slot / GRID][slot % GRID] = c;
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_with_unique_key_letters() {
        let cipher = PlayfairCipher::new("keyword");
        assert_eq!(cipher.grid[0], ['k', 'e', 'y', 'w', 'o']);
        assert_eq!(cipher.grid[1][0], 'r');
        assert_eq!(cipher.grid[1][1], 'd');
        // Remaining cells continue alphabetically, skipping j.
        assert_eq!(cipher.grid[1][2], 'a');
        let flat: Vec<char> = cipher.grid.iter().flatten().copied().collect();
        assert_eq!(flat.len(), 25);
        assert!(!flat.contains(&'j'));
    }

    #[test]
    fn j_folds_into_i() {
        let cipher = PlayfairCipher::new("cipher");
        assert_eq!(cipher.position('j'), cipher.position('i'));
    }

    #[test]
    fn filler_free_even_text_roundtrips() {
        let cipher = PlayfairCipher::new("cipher");
        let text = "ambidextrous";
        let encrypted = cipher.encrypt(text);
        assert_ne!(encrypted, text);
        assert_eq!(cipher.decrypt(&encrypted), text);
    }

    #[test]
    fn same_row_shifts_one_column_right() {
        let cipher = PlayfairCipher::new("keyword");
        // 'k' and 'y' share row 0; each moves one column right.
        assert_eq!(cipher.encrypt("ky"), "ew");
        assert_eq!(cipher.decrypt("ew"), "ky");
    }

    #[test]
    fn rectangle_rule_swaps_columns() {
        let cipher = PlayfairCipher::new("keyword");
        let encrypted = cipher.encrypt("ka");
        // Rectangle rule is its own inverse.
        assert_eq!(cipher.decrypt(&encrypted), "ka");
    }

    #[test]
    fn doubled_letter_gets_an_x_filler() {
        let cipher = PlayfairCipher::new("cipher");
        // "ll" becomes the digrams (l, x)(l, x); the output keeps only
        // as many letters as the input held positions for.
        let encrypted = cipher.encrypt("ll");
        assert_eq!(encrypted.len(), 2);
        let expected = cipher.map_pair('l', 'x', false);
        assert_eq!(encrypted.chars().next(), Some(expected.0));
    }

    #[test]
    fn punctuation_keeps_position_and_case_is_restored() {
        let cipher = PlayfairCipher::new("cipher");
        let encrypted = cipher.encrypt("Ab, cd!");
        assert_eq!(encrypted.chars().nth(2), Some(','));
        assert_eq!(encrypted.chars().nth(3), Some(' '));
        assert_eq!(encrypted.chars().last(), Some('!'));
        assert!(encrypted.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        assert!(encrypted.chars().nth(1).is_some_and(|c| c.is_ascii_lowercase()));
    }
}

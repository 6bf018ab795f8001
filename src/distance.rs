/*!
Edit distance between words.

`levenshtein` counts the minimum number of single-character insertions,
deletions and substitutions needed to turn one string into the other. It
works on `char`s rather than bytes so multi-byte letters count as one edit.
*/

/// Levenshtein distance between `a` and `b`.
///
/// Standard dynamic-programming recurrence, kept to a single rolling row
/// sized by the shorter input. `levenshtein(a, b) == levenshtein(b, a)` and
/// `levenshtein("", s)` is the number of chars in `s`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Iterate over the longer input so the row is as short as possible.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    // row[j] holds the distance between long[..i] and short[..j]
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

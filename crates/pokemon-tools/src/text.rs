//! Small text helpers shared by the tools.

/// Title-case text word by word.
///
/// A letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise, so `mr-mime` becomes `Mr-Mime` and
/// `electric, ground` becomes `Electric, Ground`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Join names with `", "`, or return `empty` when there are none.
pub fn join_or<'a, I>(names: I, empty: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = names.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("mr-mime"), "Mr-Mime");
        assert_eq!(title_case("electric, ground"), "Electric, Ground");
        assert_eq!(title_case("LIGHTNING-ROD"), "Lightning-Rod");
    }

    #[test]
    fn test_title_case_digits_and_marks() {
        assert_eq!(title_case("porygon2"), "Porygon2");
        assert_eq!(title_case("farfetch’d"), "Farfetch’D");
        assert_eq!(title_case("flabébé"), "Flabébé");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_join_or() {
        assert_eq!(join_or(["fire", "water"], "None"), "fire, water");
        assert_eq!(join_or(Vec::<&str>::new(), "None"), "None");
    }
}

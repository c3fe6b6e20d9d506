//! Case conversions.

pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// First character upper-cased, the rest untouched: "carlos" → "Carlos".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Last character upper-cased: "carlos" → "carloS".
pub fn capitalize_last(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    match chars.pop() {
        Some(last) => {
            let mut out: String = chars.into_iter().collect();
            out.extend(last.to_uppercase());
            out
        }
        None => String::new(),
    }
}

/// "carlos" → "CarloS".
pub fn capitalize_first_last(s: &str) -> String {
    capitalize_last(&capitalize(s))
}

/// Alternating case starting lower: "carlos" → "cArLoS".
pub fn toggle_case(s: &str) -> String {
    alternate(s, false)
}

/// Alternating case starting upper: "carlos" → "CaRlOs".
pub fn toggle_case_inverse(s: &str) -> String {
    alternate(s, true)
}

fn alternate(s: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if (i % 2 == 0) == upper_first {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization_variants() {
        assert_eq!(capitalize("carlos"), "Carlos");
        assert_eq!(capitalize_last("carlos"), "carloS");
        assert_eq!(capitalize_first_last("carlos"), "CarloS");
        assert_eq!(capitalize("ñandu"), "Ñandu");
    }

    #[test]
    fn alternating_phases() {
        assert_eq!(toggle_case("carlos"), "cArLoS");
        assert_eq!(toggle_case_inverse("carlos"), "CaRlOs");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for f in [
            upper,
            lower,
            capitalize,
            capitalize_last,
            capitalize_first_last,
            toggle_case,
            toggle_case_inverse,
        ] {
            assert_eq!(f(""), "");
        }
    }
}

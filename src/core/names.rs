use crate::models::NearbyBusiness;

/// Shortest normalized name allowed to match as a substring of another name.
/// Shorter names ("bp") must match exactly.
const MIN_SUBSTRING_LEN: usize = 3;

/// Latin-1 accented letters to their unaccented lowercase form
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lowercase, fold accents, strip punctuation, collapse whitespace.
///
/// "McDonald's" and "MCDONALDS" both normalize to "mcdonalds"; "Café" to "cafe".
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case/punctuation-insensitive bidirectional substring match
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    normalized_match(&normalize_name(a), &normalize_name(b))
}

fn normalized_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.len() >= MIN_SUBSTRING_LEN && longer.contains(shorter)
}

/// True if a business matching `name` already operates near the site
pub fn is_present_nearby(name: &str, nearby: &[NearbyBusiness]) -> bool {
    let target = normalize_name(name);
    nearby
        .iter()
        .any(|business| normalized_match(&target, &normalize_name(&business.name)))
}

/// True if the lowercased text contains any of the keywords
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str) -> NearbyBusiness {
        NearbyBusiness {
            name: name.to_string(),
            business_type: "restaurant".to_string(),
            distance_miles: Some(0.2),
        }
    }

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize_name("McDonald's"), "mcdonalds");
        assert_eq!(normalize_name("  Chick-fil-A  "), "chickfila");
        assert_eq!(normalize_name("Fairfield Inn & Suites"), "fairfield inn suites");
    }

    #[test]
    fn test_normalize_folds_accents() {
        assert_eq!(normalize_name("Café Rio"), "cafe rio");
        assert_eq!(normalize_name("CRÈME BRÛLÉE"), "creme brulee");
        assert!(names_match("Cafe Rio", "CAFÉ RIO #12"));
    }

    #[test]
    fn test_bidirectional_substring() {
        assert!(names_match("Starbucks", "Starbucks Coffee #1234"));
        assert!(names_match("Casey's General Store", "CASEYS"));
        assert!(!names_match("Target", "Walgreens"));
    }

    #[test]
    fn test_short_names_require_exact_match() {
        assert!(names_match("BP", "bp"));
        assert!(!names_match("BP", "Subpar Pizza"));
    }

    #[test]
    fn test_empty_names_never_match() {
        assert!(!names_match("", "Starbucks"));
        assert!(!names_match("!!!", "Starbucks"));
    }

    #[test]
    fn test_present_nearby() {
        let nearby = vec![business("Dunkin' Donuts"), business("Shell")];
        assert!(is_present_nearby("Dunkin'", &nearby));
        assert!(is_present_nearby("shell", &nearby));
        assert!(!is_present_nearby("Starbucks", &nearby));
    }
}

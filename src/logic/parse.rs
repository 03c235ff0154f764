//! Readers for the free-text catalogue fields.
//!
//! Every function here is total: text that cannot be understood resolves to
//! an empty month set or "no constraint", never to an error.

use std::collections::BTreeSet;

pub type MonthSet = BTreeSet<u8>;

pub const ALL_YEAR_MARKER: &str = "全年";
pub const AUTUMN_WINTER_MARKER: &str = "秋冬";
pub const EDIBLE_MARKER: &str = "食用";
pub const NOT_HARDY_MARKER: &str = "不耐寒";
pub const MODERATELY_HARDY_MARKERS: [&str; 2] = ["较耐寒", "半耐寒"];

/// Hardiness assumed for plants described as not cold-hardy (°C).
pub const NOT_HARDY_LIMIT: i32 = 5;
/// Hardiness assumed for moderately cold-hardy plants (°C).
pub const MODERATELY_HARDY_LIMIT: i32 = -5;

const MONTH_SUFFIX: char = '月';
const RANGE_DASHES: [char; 5] = ['-', '~', '～', '—', '–'];
const MINUS_SIGNS: [char; 3] = ['-', '－', '−'];

/// Months in which a plant is ornamental, from text such as `5-9月`,
/// `11-2月` (wrapping past December), `4月` or `全年`.
pub fn bloom_months(text: &str) -> MonthSet {
    if text.contains(ALL_YEAR_MARKER) {
        return (1..=12).collect();
    }
    if text.contains(AUTUMN_WINTER_MARKER) {
        return (9..=12).collect();
    }
    if text.contains(EDIBLE_MARKER) {
        return MonthSet::new();
    }
    if let Some((start, end)) = find_month_range(text) {
        return month_span(start, end);
    }
    find_single_month(text).map(|m| MonthSet::from([m])).unwrap_or_default()
}

/// Inclusive month span, wrapping through December when `start > end`.
pub fn month_span(start: u8, end: u8) -> MonthSet {
    if start <= end {
        (start..=end).collect()
    } else {
        (start..=12).chain(1..=end).collect()
    }
}

/// Lowest tolerated temperature in °C, or `None` when the text places no
/// constraint on the plant.
pub fn cold_limit(text: &str) -> Option<i32> {
    if let Some(temperature) = find_temperature(text) {
        return Some(temperature);
    }
    if text.contains(NOT_HARDY_MARKER) {
        return Some(NOT_HARDY_LIMIT);
    }
    if MODERATELY_HARDY_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(MODERATELY_HARDY_LIMIT);
    }
    None
}

/// Coldest expected winter temperature (°C) for a latitude band.
pub fn regional_min_temperature(lat: f64) -> i32 {
    if lat >= 50.0 {
        -35
    } else if lat >= 40.0 {
        -20
    } else if lat >= 30.0 {
        -10
    } else if lat >= 20.0 {
        0
    } else {
        5
    }
}

/// Reads the run of ASCII digits starting at `start`, returning the value and
/// the index just past it.
fn read_number(chars: &[char], start: usize) -> Option<(u32, usize)> {
    let mut end = start;
    let mut value: u32 = 0;
    while let Some(digit) = chars.get(end).and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(digit);
        end += 1;
    }
    (end > start).then_some((value, end))
}

/// Start indices of every maximal digit run.
fn number_starts(chars: &[char]) -> impl Iterator<Item = usize> + '_ {
    (0..chars.len()).filter(move |&i| {
        chars[i].is_ascii_digit() && (i == 0 || !chars[i - 1].is_ascii_digit())
    })
}

fn as_month(value: u32) -> Option<u8> {
    (1..=12).contains(&value).then_some(value as u8)
}

fn find_month_range(text: &str) -> Option<(u8, u8)> {
    let chars: Vec<char> = text.chars().collect();
    let found = number_starts(&chars).find_map(|i| {
        let (start, after_start) = read_number(&chars, i)?;
        if !RANGE_DASHES.contains(chars.get(after_start)?) {
            return None;
        }
        let (end, after_end) = read_number(&chars, after_start + 1)?;
        if *chars.get(after_end)? != MONTH_SUFFIX {
            return None;
        }
        Some((as_month(start)?, as_month(end)?))
    });
    found
}

fn find_single_month(text: &str) -> Option<u8> {
    let chars: Vec<char> = text.chars().collect();
    let found = number_starts(&chars).find_map(|i| {
        let (month, after) = read_number(&chars, i)?;
        if *chars.get(after)? != MONTH_SUFFIX {
            return None;
        }
        as_month(month)
    });
    found
}

fn is_celsius_at(chars: &[char], i: usize) -> bool {
    match chars.get(i).copied() {
        Some('℃') => true,
        Some('°') => matches!(chars.get(i + 1).copied(), Some('C') | Some('c')),
        _ => false,
    }
}

fn find_temperature(text: &str) -> Option<i32> {
    let chars: Vec<char> = text.chars().collect();
    let found = number_starts(&chars).find_map(|i| {
        let (value, after) = read_number(&chars, i)?;
        if !is_celsius_at(&chars, after) {
            return None;
        }
        let value = i32::try_from(value).ok()?;
        let negative = i > 0 && MINUS_SIGNS.contains(&chars[i - 1]);
        Some(if negative { -value } else { value })
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(list: &[u8]) -> MonthSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_bloom_all_year() {
        assert_eq!(bloom_months("全年常绿").len(), 12);
    }

    #[test]
    fn test_bloom_autumn_winter_marker() {
        assert_eq!(bloom_months("秋冬观果"), months(&[9, 10, 11, 12]));
    }

    #[test]
    fn test_bloom_edible_marker_is_empty() {
        assert!(bloom_months("叶可食用，6-8月采收").is_empty());
    }

    #[test]
    fn test_bloom_simple_range() {
        assert_eq!(bloom_months("花期5-9月"), months(&[5, 6, 7, 8, 9]));
    }

    #[test]
    fn test_bloom_cross_year_range() {
        assert_eq!(bloom_months("11-2月"), months(&[11, 12, 1, 2]));
    }

    #[test]
    fn test_bloom_range_with_full_width_tilde() {
        assert_eq!(bloom_months("3～4月"), months(&[3, 4]));
    }

    #[test]
    fn test_bloom_single_month() {
        assert_eq!(bloom_months("4月盛花"), months(&[4]));
    }

    #[test]
    fn test_bloom_range_beats_single_month() {
        // "9月" alone would also match, but the range comes first
        assert_eq!(bloom_months("6-9月").len(), 4);
    }

    #[test]
    fn test_bloom_unparseable_is_empty() {
        assert!(bloom_months("").is_empty());
        assert!(bloom_months("春末夏初").is_empty());
        assert!(bloom_months("13月").is_empty());
    }

    #[test]
    fn test_cold_limit_negative_temperature() {
        assert_eq!(cold_limit("耐寒（可耐-20℃低温）"), Some(-20));
        assert_eq!(cold_limit("可耐－15℃"), Some(-15));
    }

    #[test]
    fn test_cold_limit_positive_temperature() {
        assert_eq!(cold_limit("越冬需10℃以上"), Some(10));
        assert_eq!(cold_limit("min 3°C"), Some(3));
    }

    #[test]
    fn test_cold_limit_markers() {
        assert_eq!(cold_limit("不耐寒"), Some(NOT_HARDY_LIMIT));
        assert_eq!(cold_limit("较耐寒"), Some(MODERATELY_HARDY_LIMIT));
        assert_eq!(cold_limit("半耐寒，需覆盖"), Some(MODERATELY_HARDY_LIMIT));
    }

    #[test]
    fn test_cold_limit_number_beats_marker() {
        assert_eq!(cold_limit("不耐寒，最低0℃"), Some(0));
    }

    #[test]
    fn test_cold_limit_unknown_text_has_no_constraint() {
        assert_eq!(cold_limit("耐寒"), None);
        assert_eq!(cold_limit(""), None);
    }

    #[test]
    fn test_scanning_skips_earlier_digit_runs() {
        assert_eq!(cold_limit("2年生，可耐-15℃"), Some(-15));
        assert_eq!(bloom_months("第2年起5-6月"), months(&[5, 6]));
        assert_eq!(bloom_months("株高30cm，7月"), months(&[7]));
    }

    #[test]
    fn test_regional_bands() {
        assert_eq!(regional_min_temperature(55.0), -35);
        assert_eq!(regional_min_temperature(50.0), -35);
        assert_eq!(regional_min_temperature(45.0), -20);
        assert_eq!(regional_min_temperature(30.59), -10);
        assert_eq!(regional_min_temperature(25.0), 0);
        assert_eq!(regional_min_temperature(10.0), 5);
    }
}

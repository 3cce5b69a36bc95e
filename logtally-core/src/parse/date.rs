/// Shape check for `YYYY-MM-DD HH:MM:SS.ffffff`.
///
/// Only the digit groups and separators are checked. Field widths and
/// calendar ranges are not, so `2024-13-45 99:00:00.1` passes.
pub(super) fn is_timestamp(value: &str) -> bool {
    let Some((day, time)) = value.split_once(' ') else {
        return false;
    };
    let Some((clock, fraction)) = time.split_once('.') else {
        return false;
    };

    digit_groups(day, '-', 3) && digit_groups(clock, ':', 3) && is_digits(fraction)
}

fn digit_groups(value: &str, separator: char, expected: usize) -> bool {
    let mut groups = 0;
    for group in value.split(separator) {
        if !is_digits(group) {
            return false;
        }
        groups += 1;
    }
    groups == expected
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

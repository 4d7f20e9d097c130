//! Natural ordering for file names.
//!
//! Runs of ASCII digits compare by numeric value (`clip2` < `clip10`), all
//! other characters compare case-insensitively. Names that are equal under
//! those rules fall back to plain byte order so sorting is total and
//! deterministic.

use std::{cmp::Ordering, iter::Peekable, str::Chars};

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Sort in place using [`natural_cmp`].
pub fn sort_natural(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}

fn natural_cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                compare_numeric(&l_digits, &r_digits)
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                l.to_lowercase().cmp(r.to_lowercase())
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

// Compares digit runs of any length without parsing into an integer.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');

    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}

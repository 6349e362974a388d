use std::fmt::Display;
use std::io::Error;
use std::ops::Add;

pub fn err_invalid_data<E>(msg: E) -> Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Error::new(std::io::ErrorKind::InvalidData, msg)
}

/// Render a set of integers as comma separated singletons and dash joined closed ranges,
/// e.g. `1-3, 5-6, 8`. Input is sorted and deduplicated first, so any finite iterable works.
pub fn format_ranges<I, T>(numbers: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Copy + Ord + Display + Add<Output = T> + From<u8>,
{
    let mut numbers: Vec<T> = numbers.into_iter().collect();
    numbers.sort_unstable();
    numbers.dedup();

    let mut iter = numbers.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut ranges = Vec::new();
    let (mut start, mut end) = (first, first);
    for n in iter {
        if n == end + T::from(1u8) {
            end = n;
        } else {
            ranges.push(run(start, end));
            start = n;
            end = n;
        }
    }
    ranges.push(run(start, end));
    ranges.join(", ")
}

fn run<T: Eq + Display>(start: T, end: T) -> String {
    if start == end {
        format!("{}", start)
    } else {
        format!("{}-{}", start, end)
    }
}

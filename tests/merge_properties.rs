//! Library-level checks of label merging over every input ordering.

use bed_label_merge::bed::parse_records;
use bed_label_merge::commands::CollapseCommand;
use bed_label_merge::interval::{LabeledRecord, MergedInterval};

const LINES: [&str; 5] = [
    "chr1\t300\t400\tA",
    "chr1\t100\t150\tB",
    "chr1\t50\t120\tA",
    "chr2\t900\t1000\tC",
    "chr1\t200\t800\tA",
];

/// All orderings of `items` (Heap's algorithm).
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k {
            heap(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
    }
    let mut out = Vec::new();
    heap(items.len(), &mut items.to_vec(), &mut out);
    out
}

fn collapse(lines: &[&str], buffer: u64) -> Vec<MergedInterval> {
    let records = parse_records(&lines.join("\n")).unwrap();
    CollapseCommand::new()
        .with_buffer(buffer)
        .collapse_records(records.into_iter().map(Ok))
        .unwrap()
}

fn first_seen(lines: &[&str]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for rec in parse_records(&lines.join("\n")).unwrap() {
        if !labels.contains(&rec.label) {
            labels.push(rec.label);
        }
    }
    labels
}

#[test]
fn test_bounds_independent_of_order() {
    let orderings = permutations(&LINES[..]);
    assert_eq!(orderings.len(), 120);

    for ordering in &orderings {
        let mut merged: Vec<_> = collapse(ordering, 0)
            .into_iter()
            .map(|r| (r.label.clone(), r.start(), r.end()))
            .collect();
        merged.sort();
        assert_eq!(
            merged,
            vec![
                ("A".to_string(), 50, 800),
                ("B".to_string(), 100, 150),
                ("C".to_string(), 900, 1000),
            ]
        );
    }
}

#[test]
fn test_output_order_is_first_seen() {
    for ordering in permutations(&LINES[..]) {
        let labels: Vec<_> = collapse(&ordering, 0).into_iter().map(|r| r.label).collect();
        assert_eq!(labels, first_seen(&ordering));
    }
}

#[test]
fn test_bounds_match_min_and_max_per_label() {
    let records = parse_records(&LINES.join("\n")).unwrap();
    for region in collapse(&LINES, 0) {
        let of_label: Vec<&LabeledRecord> =
            records.iter().filter(|r| r.label == region.label).collect();
        let min_start = of_label.iter().map(|r| r.start()).min().unwrap();
        let max_end = of_label.iter().map(|r| r.end()).max().unwrap();
        assert_eq!(region.start(), min_start);
        assert_eq!(region.end(), max_end);
        assert_eq!(region.count, of_label.len());
    }
}

#[test]
fn test_buffer_never_underflows() {
    let unpadded = collapse(&LINES, 0);
    for buffer in [0, 1, 49, 50, 51, 120, 10_000] {
        for (plain, padded) in unpadded.iter().zip(collapse(&LINES, buffer)) {
            assert_eq!(padded.start(), plain.start().saturating_sub(buffer));
            assert_eq!(padded.end(), plain.end() + buffer);
        }
    }
}

#[test]
fn test_comment_lines_never_contribute() {
    let mut with_comments: Vec<&str> = LINES.to_vec();
    with_comments.insert(0, "#chr9\t0\t5\tZ");
    with_comments.insert(3, "#chr1\t0\t99999\tA");
    with_comments.push("# trailing note");

    let labels: Vec<_> = collapse(&with_comments, 0)
        .into_iter()
        .map(|r| (r.label.clone(), r.start(), r.end()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("A".to_string(), 50, 800),
            ("B".to_string(), 100, 150),
            ("C".to_string(), 900, 1000),
        ]
    );
}

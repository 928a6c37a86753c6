use sectorgen_core::layout::{CONTENT, END, HEADER};
use sectorgen_core::{output_len, write_sectors, SectorLines, SectorTemplate, SECTOR_SIZE};

fn generate(count: u64) -> Vec<u8> {
    let mut out = Vec::new();
    let summary = write_sectors(count, &mut out).unwrap();
    assert_eq!(summary.sectors, count);
    assert_eq!(summary.bytes, out.len() as u64);
    out
}

fn record(out: &[u8], index: usize) -> &str {
    std::str::from_utf8(&out[index * SECTOR_SIZE..(index + 1) * SECTOR_SIZE]).unwrap()
}

// === Scenario 1: a single sector ===
#[test]
fn test_single_sector() {
    let out = generate(1);
    assert_eq!(out.len(), 512);

    let line = record(&out, 0);
    assert!(line.starts_with("Sector 0: The quick brown fox jumped over the lazy dog."));
    assert!(line.ends_with("end."));

    let dots = &line[HEADER.len() + 1 + CONTENT.len()..SECTOR_SIZE - END.len()];
    assert!(dots.chars().all(|c| c == '.'));
    assert_eq!(dots.len(), SECTOR_SIZE - HEADER.len() - 1 - CONTENT.len() - END.len());
}

// === Scenario 2: ten sectors use a two-digit field ===
#[test]
fn test_ten_sectors() {
    let out = generate(10);
    assert_eq!(out.len(), 5120);
    assert!(record(&out, 0).starts_with("Sector 00: The quick brown fox jumped over the lazy dog."));
    assert!(record(&out, 9).starts_with("Sector 09: "));
}

// === Scenario 3: a hundred sectors use a three-digit field ===
#[test]
fn test_hundred_sectors() {
    let out = generate(100);
    assert_eq!(out.len(), 51200);
    for i in 0..100 {
        let line = record(&out, i);
        assert!(line.starts_with(&format!("Sector {i:03}: ")));
        assert!(line.ends_with("end."));
    }
    assert!(record(&out, 99).starts_with("Sector 099: "));
}

// === Scenario 4: zero sectors produce no bytes ===
#[test]
fn test_zero_sectors() {
    assert!(generate(0).is_empty());
    assert_eq!(output_len(0).unwrap(), 0);
}

// === Sink output and the line iterator agree ===
#[test]
fn test_iterator_matches_sink() {
    let out = generate(25);
    let joined: String = SectorLines::new(25).unwrap().collect();
    assert_eq!(joined.as_bytes(), out.as_slice());
}

// === Width boundaries ===
#[test]
fn test_width_boundaries() {
    for (count, width) in [(9, 1), (10, 2), (99, 2), (100, 3), (999, 3), (1000, 4)] {
        let template = SectorTemplate::for_count(count).unwrap();
        assert_eq!(template.width(), width, "count {count}");
        assert_eq!(template.render(count - 1).unwrap().len(), SECTOR_SIZE);
    }
}

//! Fuzz smoke tests for the parameter and constraint scanners.
//!
//! Feeds adversarial, random, and edge-case inputs to the parser to verify
//! it never panics and that structural invariants hold on every result.
//!
//! No external crate dependencies are used — a simple deterministic PRNG
//! provides reproducible randomness.

use routegen_core::{ParsedParameter, parse_parameter, scan_constraints, to_pretty_json};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        (self.next() as usize) % max
    }

    fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next() as u8).collect()
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Assert structural invariants on any parse result, regardless of input.
fn assert_invariants(part: &ParsedParameter, input: &str) {
    assert_eq!(part.raw, input, "raw must echo the input");
    assert_eq!(
        part.is_catch_all,
        input.starts_with('*'),
        "catch-all flag must mirror the `*` prefix in {input:?}"
    );
    assert_eq!(
        part.is_optional,
        input.ends_with('?'),
        "optional flag must mirror the trailing `?` in {input:?}"
    );

    // Reconstruct the effective span the scanners worked on.
    let start = if input.starts_with("**") {
        2
    } else if input.starts_with('*') {
        1
    } else {
        0
    };
    let stop = input.len() - usize::from(part.is_optional);
    assert!(start <= stop, "marker stripping must not cross in {input:?}");
    let effective = &input[start..stop];

    assert!(
        effective.starts_with(&part.name),
        "name {:?} must be a prefix of the effective span {effective:?}",
        part.name
    );

    let mut prev_end = start;
    for constraint in &part.constraints {
        let span = constraint.span;
        assert!(span.start <= span.end, "span inverted in {input:?}");
        assert!(span.end <= stop, "span leaks past the effective span in {input:?}");
        assert!(span.start >= prev_end, "spans overlap or regress in {input:?}");
        assert_eq!(
            input.get(span.start..span.end),
            Some(constraint.text.as_str()),
            "span must slice back to the constraint text in {input:?}"
        );
        prev_end = span.end;
    }

    if let Some(default) = &part.default_value {
        assert!(
            effective.ends_with(default.as_str()),
            "default {default:?} must terminate the effective span in {input:?}"
        );
        let eq_pos = stop - default.len() - 1;
        assert_eq!(
            input.as_bytes()[eq_pos],
            b'=',
            "default must be introduced by `=` in {input:?}"
        );
    }

    if input.is_empty() {
        assert_eq!(part, &ParsedParameter::default());
    }
}

fn check(input: &str) {
    let part = parse_parameter(input);
    assert_invariants(&part, input);
    // Serialization must be total as well.
    let _ = to_pretty_json(&part);
}

// ─── Edge-case inventory ────────────────────────────────────────────────────

#[test]
fn edge_case_inventory() {
    for input in [
        "", ":", "=", "(", ")", "?", "*", "**", "***", "*?", "**?", "*=?", "::", "==", "()",
        ")(", "(((", ")))", ":::", "a:", "a=", "a(", "a)", ":a", "=a", "(a", ")a", "?a", "a?b",
        "*a*", "a**", "=:x", "::x", "x():", "x()(", "x()=y", "()?", "(=)", ":(", ":)", "=(",
        "*:int", "?:?", "=?", ":?", "??", "*?*?", "id:foo(bar=5", "a(:x", "a:b(c:d(e:f",
        "id::=x", "id:()=", "id:a()b()c", "**(:)?",
    ] {
        check(input);
    }
}

// ─── Random inputs ──────────────────────────────────────────────────────────

#[test]
fn random_delimiter_soup_never_panics() {
    let alphabet: &[u8] = b"ab1:=()*?,./-_";
    let mut rng = SimpleRng::new(0x5eed);
    for _ in 0..2000 {
        let len = rng.gen_range(25);
        let input: String = (0..len)
            .map(|_| alphabet[rng.gen_range(alphabet.len())] as char)
            .collect();
        check(&input);
    }
}

#[test]
fn random_bytes_never_panic() {
    let mut rng = SimpleRng::new(42);
    for _ in 0..500 {
        let len = rng.gen_range(33);
        let bytes = rng.gen_bytes(len);
        let input = String::from_utf8_lossy(&bytes).into_owned();
        check(&input);
    }
}

#[test]
fn every_prefix_and_suffix_parses() {
    let samples = [
        r"**files:regex(^(a|b):\d+$):max(10)=x/y?",
        "id:range(1,10):int=5",
        "*café:minlength(2)?",
        "a(:x:b))=((",
    ];
    for sample in samples {
        for (pos, _) in sample.char_indices() {
            check(&sample[..pos]);
            check(&sample[pos..]);
        }
        check(sample);
    }
}

// ─── Direct constraint scans ────────────────────────────────────────────────

#[test]
fn constraint_scanner_is_total_over_ascii_spans() {
    let alphabet: &[u8] = b"ab:=()?*";
    let mut rng = SimpleRng::new(7);
    for _ in 0..2000 {
        let len = rng.gen_range(17);
        let text: String = (0..len)
            .map(|_| alphabet[rng.gen_range(alphabet.len())] as char)
            .collect();
        let cursor = rng.gen_range(len + 3);
        let stop = rng.gen_range(len + 3);
        let scan = scan_constraints(&text, cursor, stop);
        for constraint in &scan.constraints {
            assert_eq!(
                text.get(constraint.span.start..constraint.span.end),
                Some(constraint.text.as_str()),
                "scan span must slice back to its text for {text:?}"
            );
        }
    }
}

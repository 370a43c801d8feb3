#![no_main]

use arbitrary::Arbitrary;
use gridplace::resolve_raw;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Request<'a> {
    count: i64,
    breakpoint: &'a str,
}

fuzz_target!(|req: Request<'_>| {
    match resolve_raw(req.count, req.breakpoint) {
        Ok(layout) => {
            assert!(req.count >= 0, "negative count accepted");
            assert!(layout.shape.columns >= 1, "zero-width grid");
            assert!(layout.shape.rows >= 1, "zero-height grid");
            let violations = layout.validate();
            assert!(violations.is_empty(), "invalid layout: {violations:?}");
            if layout.placements.is_empty() {
                assert!(
                    layout.shape.area() >= req.count as u64,
                    "fallback grid too small"
                );
            } else {
                assert_eq!(layout.placements.len() as i64, req.count);
            }
        }
        Err(err) => assert!(err.is_invalid_input(), "unexpected error kind: {err}"),
    }
});

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Golden output of the Lerp/Slerp walk between `(0, 0)` and `(1, 1)` at five
//! evenly spaced `t`, as printed by the sandbox demo.
#![allow(missing_docs)]

use core::fmt::Write;

use echo_math::Vec2;

const EXPECTED: &str = "\
T: 0
Lerp: (0.000000, 0.000000)
SLerp: (0.000000, 0.000000)
T: 0.25
Lerp: (0.250000, 0.250000)
SLerp: (0.382683, 0.382683)
T: 0.5
Lerp: (0.500000, 0.500000)
SLerp: (0.707107, 0.707107)
T: 0.75
Lerp: (0.750000, 0.750000)
SLerp: (0.923880, 0.923880)
T: 1
Lerp: (1.000000, 1.000000)
SLerp: (1.000000, 1.000000)
";

#[test]
fn lerp_slerp_walk_matches_golden_output() {
    let start = Vec2::new(0.0, 0.0);
    let end = Vec2::new(1.0, 1.0);
    let mut out = String::new();
    for i in 0..5u8 {
        let t = f32::from(i) / 4.0;
        writeln!(out, "T: {t}").unwrap();
        writeln!(out, "Lerp: {}", Vec2::lerp(&start, &end, t)).unwrap();
        writeln!(out, "SLerp: {}", Vec2::slerp(&start, &end, t)).unwrap();
    }
    assert_eq!(out, EXPECTED);
}

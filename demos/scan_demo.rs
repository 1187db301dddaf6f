//! Demonstration: build an automaton from a small dictionary and report
//! every match in a text.
//!
//! Run with: `cargo run --example scan_demo`

use libahocorasick::prelude::*;

fn main() -> Result<(), BuildError> {
    let dictionary = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
    let text = "abccba";

    let ac: AhoCorasick = AhoCorasick::build(dictionary)?;
    let matches = ac.scan(text);

    println!("scanning {text:?} against {} patterns", ac.pattern_count());
    for (id, offsets) in matches.iter() {
        let pattern = dictionary[(id - 1) as usize];
        if offsets.is_empty() {
            println!("  {id}. {pattern:?} - no matches");
        } else {
            println!("  {id}. {pattern:?} ends at {offsets:?}");
        }
    }

    Ok(())
}

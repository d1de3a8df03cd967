use crate::program::{Op, Program, SearchHints};

/// Derive the search hints of a freshly compiled program whose main
/// chain starts at node `first`.
///
/// Only nodes on the main chain are considered: operands of BRANCH,
/// STAR and PLUS are skipped because a match may bypass them.
pub(super) fn derive(program: &Program, first: usize) -> SearchHints {
    let mut hints = SearchHints::default();

    match program.nodes.get(first).map(|node| &node.op) {
        Some(Op::Exactly(lit)) => hints.start = lit.chars().next(),
        Some(Op::Bol) => hints.anchored = true,
        _ => {}
    }

    // Longest literal on the main chain; later ones win ties.
    let mut longest: Option<&str> = None;
    let mut scan = Some(first);
    while let Some(index) = scan {
        if let Some(Op::Exactly(lit)) = program.nodes.get(index).map(|node| &node.op)
            && lit.len() >= longest.map_or(0, str::len)
        {
            longest = Some(lit.as_str());
        }
        scan = program.next(index);
    }
    hints.must = longest.map(str::to_owned);

    hints
}

/// Classic Life transition, B3/S23.
///
/// A dead cell with exactly 3 live neighbors is born. A live cell with 2 or
/// 3 live neighbors survives. Every other combination is dead in the next
/// generation.
///
/// See: https://conwaylife.com/wiki/Rulestring
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (false, 3) | (true, 2) | (true, 3))
}

//! The ordered decision table from operation + modifiers to one [`Op`].

use crate::dispatch::op::Op;
use crate::error::Result;
use crate::request::{Modifiers, Operation, Request, single_operation};

/// What: Resolve a request into exactly one logical operation.
///
/// Inputs:
/// - `request`: A constructed request.
///
/// Output:
/// - The first matching `Op` of the precedence table.
///
/// # Errors
/// - Never fails for a constructed `Request`; the signature matches [`resolve_parts`].
pub fn resolve(request: &Request) -> Result<Op> {
    resolve_parts(&[request.operation()], request.modifiers())
}

/// What: Resolve raw parts, checking the one-operation rule first.
///
/// Inputs:
/// - `operations`: All top-level operations given.
/// - `modifiers`: Modifier counters.
///
/// Output:
/// - The resolved `Op`.
///
/// # Errors
/// - Returns `InvalidRequest` unless exactly one operation is present.
///
/// Details:
/// - Sync: `c` (1, 2, 3+), `g`, `i` (1, 2+), `l`, `s`, `u`+`y`, `y`, `u`, `w`, else `S`.
/// - Query: `c e i k l m o p s u` in that order, else `Q`.
/// - Remove: `n`+`s`, `n`, `s`, else `R`.
/// - Upgrade: always `U`.
pub fn resolve_parts(operations: &[Operation], modifiers: &Modifiers) -> Result<Op> {
    let op = match single_operation(operations)? {
        Operation::Sync => resolve_sync(modifiers),
        Operation::Query => resolve_query(modifiers),
        Operation::Remove => resolve_remove(modifiers),
        Operation::Upgrade => Op::U,
    };
    Ok(op)
}

/// Sync precedence: clean, groups, info, list, search, refresh/upgrade, download.
fn resolve_sync(m: &Modifiers) -> Op {
    match m.count('c') {
        1 => return Op::Sc,
        2 => return Op::Scc,
        n if n >= 3 => return Op::Sccc,
        _ => {}
    }
    if m.is_set('g') {
        return Op::Sg;
    }
    match m.count('i') {
        1 => return Op::Si,
        n if n >= 2 => return Op::Sii,
        _ => {}
    }
    let (u, y) = (m.is_set('u'), m.is_set('y'));
    if m.is_set('l') {
        Op::Sl
    } else if m.is_set('s') {
        Op::Ss
    } else if u && y {
        Op::Suy
    } else if y {
        Op::Sy
    } else if u {
        Op::Su
    } else if m.is_set('w') {
        Op::Sw
    } else {
        Op::S
    }
}

/// Query precedence: first set letter of the table wins.
fn resolve_query(m: &Modifiers) -> Op {
    const TABLE: [(char, Op); 10] = [
        ('c', Op::Qc),
        ('e', Op::Qe),
        ('i', Op::Qi),
        ('k', Op::Qk),
        ('l', Op::Ql),
        ('m', Op::Qm),
        ('o', Op::Qo),
        ('p', Op::Qp),
        ('s', Op::Qs),
        ('u', Op::Qu),
    ];
    TABLE
        .iter()
        .find(|(letter, _)| m.is_set(*letter))
        .map_or(Op::Q, |&(_, op)| op)
}

/// Remove precedence.
fn resolve_remove(m: &Modifiers) -> Op {
    match (m.is_set('n'), m.is_set('s')) {
        (true, true) => Op::Rns,
        (true, false) => Op::Rn,
        (false, true) => Op::Rs,
        (false, false) => Op::R,
    }
}

use crate::form::FieldNode;

/// Finds the node with `id`, descending into the members of group nodes.
///
/// The scan never short-circuits: every node is visited and the candidate is
/// overwritten on each hit, so when ids repeat the **last** match in
/// iteration order wins. A group's own id is checked after its members, so a
/// group shadows a same-id member it contains. Callers rely on this ordering
/// for trees with duplicate ids; do not replace it with a map.
pub fn find<N: FieldNode>(id: i64, nodes: &[N]) -> Option<&N> {
    scan(id, nodes, &mut |_| true)
}

/// Like [`find`], but skips any group node for which `admit_group` returns
/// `false`, together with everything it contains.
pub fn find_where<'a, N, F>(id: i64, nodes: &'a [N], mut admit_group: F) -> Option<&'a N>
where
    N: FieldNode,
    F: FnMut(&N) -> bool,
{
    scan(id, nodes, &mut admit_group)
}

fn scan<'a, N: FieldNode>(
    id: i64,
    nodes: &'a [N],
    admit_group: &mut dyn FnMut(&N) -> bool,
) -> Option<&'a N> {
    let mut found = None;
    for node in nodes {
        if let Some(members) = node.members() {
            if !admit_group(node) {
                continue;
            }
            if let Some(hit) = scan(id, members, admit_group) {
                found = Some(hit);
            }
        }
        if node.field_id() == id {
            found = Some(node);
        }
    }
    found
}

/// Resolves `id` against the top level of a live tree for value rendering.
///
/// Group nodes are searched through their members only and are never
/// returned themselves; plain nodes match on their own id. Every match
/// yields one entry, in tree order.
pub fn resolve_live<N: FieldNode>(id: i64, nodes: &[N]) -> Vec<&N> {
    let mut matches = Vec::new();
    for node in nodes {
        match node.members() {
            Some(members) => matches.extend(members.iter().filter(|m| m.field_id() == id)),
            None if node.field_id() == id => matches.push(node),
            None => {}
        }
    }
    matches
}
